use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod models;
pub mod state;
pub mod template;

use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/links", get(handlers::links::links))
        .route("/api/update-status", post(handlers::update::update_status))
        .route("/api/completed-count", get(handlers::count::completed_count))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
