use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use linkscreen_core::{RecordStore, nav};

use crate::handlers::with_store;
use crate::models::{UpdateRequest, UpdateResponse};
use crate::state::AppState;

/// Persist a decision and report what to show next.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> Response {
    let (Some(url), Some(status)) = (req.url, req.status) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "missing required parameters: url and status" })),
        )
            .into_response();
    };

    let decided_url = url.clone();
    let records = match with_store(&state, move |store| store.set_status(&url, &status)).await {
        Ok(records) => records,
        Err(resp) => return resp,
    };

    let pending = RecordStore::pending_indices(&records);
    // The decided record is the first one matching the URL, in file order.
    let decided_index = records.iter().position(|r| r.url == decided_url);
    let next_index = decided_index.and_then(|i| nav::next_after_decision(&pending, i));
    let next_url = next_index.map(|i| records[i].url.clone());

    tracing::info!(url = %decided_url, remaining = pending.len(), "decision recorded");
    Json(UpdateResponse {
        success: true,
        next_index,
        next_url,
        remaining: pending.len(),
    })
    .into_response()
}
