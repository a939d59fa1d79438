use linkscreen_core::Direction;
use serde::{Deserialize, Serialize};

// ── Queue JSON (matches the page's expected shape) ──────────────────────

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize)]
pub struct LinksQuery {
    /// Record index to pin the cursor to, if still pending.
    pub index: Option<usize>,
    /// Traversal direction; selects the fallback anchor and how the
    /// position is counted. Defaults to forward.
    #[serde(default)]
    pub direction: Direction,
}

/// Current-item payload for `GET /api/links`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksResponse {
    /// Record index of the current item, or -1 when nothing is pending.
    pub current_index: i64,
    pub current_url: Option<String>,
    /// Number of pending items.
    pub total: usize,
    /// All pending URLs, in source order.
    pub urls: Vec<String>,
    pub pending_indices: Vec<usize>,
    /// 1-based position in the direction of travel, 0 when drained.
    pub current_position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinksResponse {
    /// Terminal payload when nothing is pending. Not an error.
    pub fn drained() -> Self {
        Self {
            current_index: -1,
            current_url: None,
            total: 0,
            urls: Vec::new(),
            pending_indices: Vec::new(),
            current_position: 0,
            message: Some("no pending items".to_string()),
        }
    }
}

// ── Update DTOs ─────────────────────────────────────────────────────────

/// Body of `POST /api/update-status`. Both fields are required; they are
/// optional here so a missing field yields the page's 400 shape rather than
/// a rejection from the extractor.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub success: bool,
    /// First pending index after the decided record, in file order.
    pub next_index: Option<usize>,
    pub next_url: Option<String>,
    /// Pending items left after the write.
    pub remaining: usize,
}

// ── Completed count ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedCountResponse {
    pub completed_count: usize,
    pub total: usize,
}
