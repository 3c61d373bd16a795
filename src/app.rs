use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/filters", get(handlers::get_filters))
        .route("/api/spots", get(handlers::get_spots))
        .route("/api/analysis", get(handlers::get_analysis))
        .with_state(state)
}
