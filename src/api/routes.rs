//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Stocks
        .route("/api/newstock", post(handlers::create_stock))
        .route("/api/stock", get(handlers::get_all_stocks))
        .route(
            "/api/stock/{id}",
            get(handlers::get_stock).put(handlers::update_stock),
        )
        .route("/api/deletestock/{id}", delete(handlers::delete_stock))
        .with_state(state)
}
