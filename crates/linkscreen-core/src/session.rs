//! Operator-facing view state machine.
//!
//! The machine never performs I/O: operator actions return a
//! [`FetchCommand`] describing what the driver should load or persist next,
//! and the driver feeds outcomes back through the `on_*` methods. The
//! embedded web page runs the same machine in JS; this is the canonical,
//! testable definition.

use crate::nav::{self, CurrentItem, Direction, StepWay};

/// How the current URL is surfaced to the operator. Orthogonal to the
/// navigation state: switching modes never triggers a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Inline iframe (the target site may refuse to render).
    Embedded,
    /// Open in a new browser tab.
    #[default]
    NewTab,
    /// Open through the third-party profile viewer.
    Viewer,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Embedded => "embed",
            Self::NewTab => "new tab",
            Self::Viewer => "viewer",
        }
    }
}

/// Navigation state of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch or update is in flight.
    Loading,
    /// An item is on screen.
    Ready(CurrentItem),
    /// Nothing left to review. Terminal, not an error.
    Empty,
    /// A fetch or update failed; a manual retry is offered.
    Error(String),
}

/// An operator decision on the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// The status string written to the queue file.
    pub fn status(self) -> &'static str {
        match self {
            Self::Accept => "true",
            Self::Reject => "false",
        }
    }
}

/// What the driver should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    /// Load the current item, optionally pinning a record index.
    Load {
        index: Option<usize>,
        direction: Direction,
    },
    /// Persist a decision for the given URL, then report back via
    /// [`SessionView::on_decided`].
    Decide { url: String, decision: Decision },
}

/// Client-visible session: current view state, traversal direction, display
/// mode, and the last pending snapshot (a read-through cache — the file
/// remains the source of truth and is re-fetched on every action).
#[derive(Debug, Clone)]
pub struct SessionView {
    state: ViewState,
    direction: Direction,
    mode: ViewMode,
    pending: Vec<usize>,
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            direction: Direction::Forward,
            mode: ViewMode::default(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch display mode. Orthogonal: the navigation state is untouched.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Initial load.
    pub fn start(&mut self) -> FetchCommand {
        self.state = ViewState::Loading;
        self.load(None)
    }

    /// A load finished: the fetched item (if any) plus the fresh pending
    /// snapshot it was derived from.
    pub fn on_loaded(&mut self, item: Option<CurrentItem>, pending: Vec<usize>) {
        self.pending = pending;
        self.state = match item {
            Some(item) => ViewState::Ready(item),
            None => ViewState::Empty,
        };
    }

    /// A load or update failed.
    pub fn on_failed(&mut self, message: impl Into<String>) {
        self.state = ViewState::Error(message.into());
    }

    /// Manual retry from the error screen.
    pub fn retry(&mut self) -> Option<FetchCommand> {
        if !matches!(self.state, ViewState::Error(_)) {
            return None;
        }
        self.state = ViewState::Loading;
        Some(self.load(None))
    }

    /// Move to the previous or next pending item in the direction of
    /// travel. No-op unless an item is on screen and a neighbor exists.
    pub fn step(&mut self, way: StepWay) -> Option<FetchCommand> {
        let ViewState::Ready(item) = &self.state else {
            return None;
        };
        let target = nav::step(&self.pending, item.index, self.direction, way)?;
        self.state = ViewState::Loading;
        Some(self.load(Some(target)))
    }

    /// Accept or reject the item on screen.
    pub fn decide(&mut self, decision: Decision) -> Option<FetchCommand> {
        let ViewState::Ready(item) = &self.state else {
            return None;
        };
        let url = item.url.clone();
        self.state = ViewState::Loading;
        Some(FetchCommand::Decide { url, decision })
    }

    /// Outcome of a persisted decision: the next pending index (if one lies
    /// beyond the decided record) and how many items remain.
    pub fn on_decided(&mut self, next_index: Option<usize>, remaining: usize) -> Option<FetchCommand> {
        if let Some(index) = next_index {
            self.state = ViewState::Loading;
            Some(self.load(Some(index)))
        } else if remaining == 0 {
            self.pending.clear();
            self.state = ViewState::Empty;
            None
        } else {
            // Items remain but none beyond the decided record: fall back to
            // the direction's anchor.
            self.state = ViewState::Loading;
            Some(self.load(None))
        }
    }

    /// Flip traversal direction. Re-anchors to the new direction's start
    /// rather than preserving the current item.
    pub fn toggle_direction(&mut self) -> FetchCommand {
        self.direction = self.direction.toggled();
        self.state = ViewState::Loading;
        self.load(None)
    }

    fn load(&self, index: Option<usize>) -> FetchCommand {
        FetchCommand::Load {
            index,
            direction: self.direction,
        }
    }
}

/// Third-party viewer URL for an Instagram profile link, or `None` when the
/// link carries no recognizable username.
pub fn viewer_url(url: &str) -> Option<String> {
    let rest = url.split("instagram.com/").nth(1)?;
    let username = rest.split(['/', '?']).next()?;
    if username.is_empty() {
        return None;
    }
    Some(format!("https://www.picuki.com/profile/{username}"))
}
