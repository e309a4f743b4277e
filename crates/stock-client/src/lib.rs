//! HTTP client library for the Stock API.
//!
//! This crate provides a typed HTTP client for interacting with the Stock API
//! backend. It covers every REST endpoint the backend exposes.
//!
//! # Example
//!
//! ```no_run
//! use stock_client::{ClientConfig, StockClient, StockRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stock_client::Error> {
//!     let client = StockClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     // Create a stock
//!     let created = client
//!         .create_stock(&StockRequest {
//!             name: "ACME".into(),
//!             price: 100,
//!             company: "ACME Corp".into(),
//!         })
//!         .await?;
//!     println!("Created stock {:?}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, StockClient};
pub use error::Error;
pub use types::*;
