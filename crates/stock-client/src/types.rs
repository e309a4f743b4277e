//! Request and response types for the Stock API.

use serde::{Deserialize, Serialize};


// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Stocks
// ============================================================================

/// A stored stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Storage-assigned id.
    pub stockid: i64,
    /// Ticker name.
    pub name: String,
    /// Price in whole units.
    pub price: i64,
    /// Issuing company.
    pub company: String,
}

/// Payload for creating or updating a stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRequest {
    /// Ticker name.
    pub name: String,
    /// Price in whole units.
    pub price: i64,
    /// Issuing company.
    pub company: String,
}

/// Response for create, update, and delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Id of the affected stock.
    pub id: Option<i64>,
    /// Human-readable result message.
    pub message: Option<String>,
}
