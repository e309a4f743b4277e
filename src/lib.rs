//! # Stock API Backend - REST API Server
//!
//! A REST API backend for managing stock records in
//! [PostgreSQL](https://www.postgresql.org/). Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and
//! provides OpenAPI/Swagger documentation via
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **RESTful API**: Full CRUD operations for stock records.
//!
//! - **Pluggable Storage**: Handlers talk to a [`db::StockStore`] trait, so
//!   the Postgres store can be swapped for the in-memory one in tests.
//!
//! - **Pooled Connections**: A single bounded `sqlx` pool shared by all
//!   requests.
//!
//! - **OpenAPI Documentation**: Auto-generated Swagger UI for API exploration
//!   and testing at `/swagger-ui/`.
//!
//! - **CORS Support**: Cross-origin resource sharing enabled for frontend
//!   integration.
//!
//! - **Structured Logging**: Request tracing with `tower-http` for debugging
//!   and monitoring.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`db`] | Connection pool and stock storage implementations |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/newstock` | Create a stock |
//! | GET | `/api/stock` | List all stocks |
//! | GET | `/api/stock/{id}` | Get a stock by id |
//! | PUT | `/api/stock/{id}` | Update a stock by id |
//! | DELETE | `/api/deletestock/{id}` | Delete a stock by id |
//!
//! ## Example Usage
//!
//! ### Starting the Server
//!
//! ```bash
//! # Development mode
//! DATABASE_URL=postgres://localhost/stocks cargo run
//!
//! # With custom host/port
//! HOST=127.0.0.1 PORT=3000 DATABASE_URL=postgres://localhost/stocks cargo run
//!
//! # Release build
//! cargo build --release
//! DATABASE_URL=postgres://localhost/stocks ./target/release/stock-api-backend
//! ```
//!
//! ### API Requests
//!
//! ```bash
//! # Create a stock
//! curl -X POST http://localhost:8080/api/newstock \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "ACME", "price": 100, "company": "ACME Corp"}'
//!
//! # List all stocks
//! curl http://localhost:8080/api/stock
//!
//! # Get one stock
//! curl http://localhost:8080/api/stock/1
//!
//! # Update a stock
//! curl -X PUT http://localhost:8080/api/stock/1 \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "ACME", "price": 120, "company": "ACME Corp"}'
//!
//! # Delete a stock
//! curl -X DELETE http://localhost:8080/api/deletestock/1
//! ```
//!
//! ## Swagger UI
//!
//! Once the server is running, access the interactive API documentation at:
//!
//! ```text
//! http://localhost:8080/swagger-ui/
//! ```
//!
//! ## Dependencies
//!
//! - **axum** (0.8): Async web framework
//! - **sqlx** (0.8): Async PostgreSQL driver with pooling and migrations
//! - **tower-http** (0.6): HTTP middleware (CORS, tracing)
//! - **utoipa** (5.4): OpenAPI documentation generation
//! - **utoipa-swagger-ui** (9.0): Swagger UI integration
//! - **tokio** (1.49): Async runtime
//! - **serde** (1.0): Serialization/deserialization
//! - **tracing** (0.1): Structured logging

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
