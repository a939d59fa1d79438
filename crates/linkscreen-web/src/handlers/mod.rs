pub mod count;
pub mod index;
pub mod links;
pub mod update;

use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use linkscreen_core::{RecordStore, StoreError};

use crate::state::AppState;

/// Map a store failure to the status code + `{"error": ...}` body shape the
/// page expects.
pub(crate) fn store_error_response(err: &StoreError) -> Response {
    let status = match err {
        StoreError::NotFound(_) | StoreError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Empty | StoreError::MalformedHeader { .. } => StatusCode::BAD_REQUEST,
        StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(error = %err, "store operation failed");
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

/// Run a store operation off the async runtime. The store does synchronous
/// file I/O; `spawn_blocking` keeps it from stalling the executor.
pub(crate) async fn with_store<T, F>(state: &Arc<AppState>, op: F) -> Result<T, Response>
where
    F: FnOnce(RecordStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || op(store)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(store_error_response(&err)),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": format!("store task failed: {err}") })),
        )
            .into_response()),
    }
}
