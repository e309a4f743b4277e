//! Integration tests for the Stock API.
//!
//! Each test boots the backend in-process with the in-memory store on an
//! ephemeral port, then drives it over real HTTP with
//! [`stock_client::StockClient`]. No database or external server is needed.

use std::sync::Arc;
use std::time::Duration;
use stock_api_backend::api::create_router;
use stock_api_backend::state::AppState;
use stock_client::{ClientConfig, StockClient};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Starts the API server on an ephemeral port and returns its base URL.
///
/// The server uses the in-memory store, so every call starts from an empty
/// table and ids are assigned from 1.
///
/// # Panics
/// Panics if the listener cannot be bound.
pub async fn spawn_test_server() -> String {
    let state = Arc::new(AppState::in_memory());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Creates a test client for the given base URL.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client(base_url: &str) -> Result<StockClient, stock_client::Error> {
    StockClient::new(ClientConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(10),
    })
}
