use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use linkscreen_core::RecordStore;

use crate::handlers::with_store;
use crate::models::CompletedCountResponse;
use crate::state::AppState;

pub async fn completed_count(State(state): State<Arc<AppState>>) -> Response {
    let records = match with_store(&state, |store| store.load()).await {
        Ok(records) => records,
        Err(resp) => return resp,
    };

    let (completed, total) = RecordStore::completed_count(&records);
    Json(CompletedCountResponse {
        completed_count: completed,
        total,
    })
    .into_response()
}
