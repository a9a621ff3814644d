pub mod feed;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(feed::feed_handler))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
