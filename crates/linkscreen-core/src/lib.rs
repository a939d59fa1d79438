use std::path::PathBuf;

use thiserror::Error;

pub mod config_file;
pub mod nav;
pub mod session;
pub mod store;

// Re-export for convenience
pub use nav::{CurrentItem, Direction, StepWay};
pub use session::{Decision, FetchCommand, SessionView, ViewMode, ViewState};
pub use store::RecordStore;

/// Completion flag of a record, stored in the second CSV column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneFlag {
    /// Empty column: the record still awaits a decision.
    Unset,
    /// Marked done ("true", case-insensitive).
    Accepted,
    /// Marked discarded ("false", case-insensitive).
    Rejected,
    /// Any other non-empty value. Round-trips verbatim; no validation is
    /// enforced at this layer.
    Other(String),
}

impl DoneFlag {
    /// Parse the raw column value (already split off after the first comma).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            DoneFlag::Unset
        } else if trimmed.eq_ignore_ascii_case("true") {
            DoneFlag::Accepted
        } else if trimmed.eq_ignore_ascii_case("false") {
            DoneFlag::Rejected
        } else {
            DoneFlag::Other(trimmed.to_string())
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, DoneFlag::Unset)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, DoneFlag::Accepted)
    }
}

/// A single data line of the queue file.
///
/// Records are identified by position, not URL: duplicate URLs are legal and
/// an index is only meaningful within a single load of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub url: String,
    pub done: DoneFlag,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("queue file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("queue file is empty")]
    Empty,
    #[error("malformed header: expected \"link,image_done\", found {found:?}")]
    MalformedHeader { found: String },
    #[error("no record matches url {url:?}")]
    RecordNotFound { url: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
