//! Request and response models for the REST API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;


/// A stock record as persisted and as returned over the wire.
///
/// `stockid` is the storage-assigned surrogate key and is represented as an
/// integer end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Stock {
    /// Surrogate key assigned by storage on insert.
    pub stockid: i64,
    /// Display name of the stock.
    pub name: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Issuing company.
    pub company: String,
}

/// Request body for creating or updating a stock.
///
/// A `stockid` field in the payload is ignored; identifiers are assigned by
/// storage on insert and taken from the path on update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct StockRequest {
    /// Display name of the stock.
    pub name: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Issuing company.
    pub company: String,
}

/// Response envelope for write operations (create/update/delete).
///
/// Absent fields are omitted from the serialized JSON.
#[derive(Debug, Serialize, ToSchema)]
pub struct MutationResponse {
    /// Identifier of the affected stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Human-readable result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
