use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use linkscreen_core::{RecordStore, nav};

use crate::handlers::with_store;
use crate::models::{LinksQuery, LinksResponse};
use crate::state::AppState;

/// Current item plus the pending snapshot it was derived from.
pub async fn links(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinksQuery>,
) -> Response {
    let records = match with_store(&state, |store| store.load()).await {
        Ok(records) => records,
        Err(resp) => return resp,
    };

    let pending = RecordStore::pending_indices(&records);
    let Some(item) = nav::current_item(&records, &pending, query.index, query.direction) else {
        return Json(LinksResponse::drained()).into_response();
    };

    let urls = pending.iter().map(|&i| records[i].url.clone()).collect();
    Json(LinksResponse {
        current_index: item.index as i64,
        current_url: Some(item.url),
        total: item.total,
        urls,
        pending_indices: pending,
        current_position: item.position,
        message: None,
    })
    .into_response()
}
