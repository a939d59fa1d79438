//! Pure navigation over the pending subset.
//!
//! Everything here operates on the pending index list derived from a fresh
//! load; nothing touches the file. The displayed position always counts in
//! the direction of travel, so the operator sees "item 1 of N" right after
//! reversing, not "item N of N".

use serde::Deserialize;

use crate::Record;

/// Traversal direction over the pending set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Which way the operator asked to move, relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepWay {
    Previous,
    Next,
}

/// The item currently shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentItem {
    /// Index into the full record sequence.
    pub index: usize,
    pub url: String,
    /// 1-based position in the direction of travel.
    pub position: usize,
    /// Number of pending items.
    pub total: usize,
}

/// Resolve the current item.
///
/// A `requested` index that is present in `pending` becomes the cursor;
/// anything else (including `None`) falls back to the direction's anchor:
/// the first pending index going forward, the last going reverse. Returns
/// `None` when nothing is pending — a normal terminal state, not an error.
pub fn current_item(
    records: &[Record],
    pending: &[usize],
    requested: Option<usize>,
    direction: Direction,
) -> Option<CurrentItem> {
    if pending.is_empty() {
        return None;
    }
    let anchor = match direction {
        Direction::Forward => 0,
        Direction::Reverse => pending.len() - 1,
    };
    let p = requested
        .and_then(|idx| pending.iter().position(|&i| i == idx))
        .unwrap_or(anchor);
    let index = pending[p];
    Some(CurrentItem {
        index,
        url: records[index].url.clone(),
        position: displayed_position(p, pending.len(), direction),
        total: pending.len(),
    })
}

/// 1-based position shown for the pending slot `p`, counted in the
/// direction of travel.
pub fn displayed_position(p: usize, total: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => p + 1,
        Direction::Reverse => total - p,
    }
}

/// Move one pending item from `current`, honoring the direction of travel:
/// in reverse mode "next" walks toward lower indices. Returns `None` when
/// `current` is not pending or the move would leave the list — callers
/// treat that as a no-op.
pub fn step(pending: &[usize], current: usize, direction: Direction, way: StepWay) -> Option<usize> {
    let p = pending.iter().position(|&i| i == current)?;
    let ascending = matches!(
        (direction, way),
        (Direction::Forward, StepWay::Next) | (Direction::Reverse, StepWay::Previous)
    );
    if ascending {
        pending.get(p + 1).copied()
    } else {
        p.checked_sub(1).map(|q| pending[q])
    }
}

/// The pending index that follows a just-decided record.
///
/// Selection is by ascending file order regardless of the traversal
/// direction. When nothing lies beyond the decided record but the pending
/// set is non-empty, callers fall back to [`current_item`] with no
/// requested index.
pub fn next_after_decision(pending: &[usize], decided: usize) -> Option<usize> {
    pending.iter().copied().find(|&i| i > decided)
}
