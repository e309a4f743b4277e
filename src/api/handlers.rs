//! API request handlers.

use crate::error::ApiError;
use crate::models::{HealthResponse, MutationResponse, Stock, StockRequest};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use std::sync::Arc;
use tracing::info;


// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Stock Handlers
// ============================================================================

/// Create a new stock.
#[utoipa::path(
    post,
    path = "/api/newstock",
    request_body = StockRequest,
    responses(
        (status = 200, description = "Stock created", body = MutationResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Stocks"
)]
pub async fn create_stock(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(stock) = payload?;
    let id = state.store.insert(&stock).await?;
    info!("Inserted stock {}", id);

    Ok(Json(MutationResponse {
        id: Some(id),
        message: Some("Stock created successfully".to_string()),
    }))
}

/// Get a stock by id.
#[utoipa::path(
    get,
    path = "/api/stock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    responses(
        (status = 200, description = "Stock details", body = Stock),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "Stock not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Stocks"
)]
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Stock>, ApiError> {
    let Path(id) = id?;
    let stock = state
        .store
        .fetch_by_id(id)
        .await?
        .ok_or(ApiError::StockNotFound(id))?;

    Ok(Json(stock))
}

/// List all stocks.
#[utoipa::path(
    get,
    path = "/api/stock",
    responses(
        (status = 200, description = "List of stocks", body = Vec<Stock>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Stocks"
)]
pub async fn get_all_stocks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stock>>, ApiError> {
    let stocks = state.store.fetch_all().await?;

    Ok(Json(stocks))
}

/// Update a stock by id.
#[utoipa::path(
    put,
    path = "/api/stock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    request_body = StockRequest,
    responses(
        (status = 200, description = "Stock updated", body = MutationResponse),
        (status = 400, description = "Non-integer id or invalid request body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Stocks"
)]
pub async fn update_stock(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Path(id) = id?;
    let Json(stock) = payload?;
    let affected = state.store.update_by_id(id, &stock).await?;
    info!("Updated stock {}: {} row(s) affected", id, affected);

    Ok(Json(MutationResponse {
        id: Some(id),
        message: Some(format!(
            "Stock updated successfully. Total rows/records affected {}",
            affected
        )),
    }))
}

/// Delete a stock by id.
#[utoipa::path(
    delete,
    path = "/api/deletestock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    responses(
        (status = 200, description = "Stock deleted", body = MutationResponse),
        (status = 400, description = "Non-integer id"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Stocks"
)]
pub async fn delete_stock(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Path(id) = id?;
    let deleted = state.store.delete_by_id(id).await?;
    info!("Deleted stock {}: {} row(s) deleted", id, deleted);

    Ok(Json(MutationResponse {
        id: Some(id),
        message: Some(format!(
            "Stock deleted successfully. Total rows/records deleted {}",
            deleted
        )),
    }))
}
