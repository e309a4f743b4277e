//! Storage operations for stock records.

use crate::models::{Stock, StockRequest};
use async_trait::async_trait;
use thiserror::Error;

use super::pool::DatabasePool;

/// Errors surfaced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection acquisition or statement execution failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage interface for the `stocks` table.
///
/// Handlers receive an implementation through
/// [`AppState`](crate::state::AppState), so tests can substitute the
/// in-memory store for the Postgres-backed one.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Inserts a stock and returns the storage-assigned id.
    async fn insert(&self, stock: &StockRequest) -> Result<i64, StorageError>;

    /// Fetches one stock by id. `None` means no row matched; an absent
    /// row is not a failure.
    async fn fetch_by_id(&self, id: i64) -> Result<Option<Stock>, StorageError>;

    /// Fetches every stock, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<Stock>, StorageError>;

    /// Replaces the name, price, and company of the row matching `id`.
    /// Returns the affected-row count, 0 when the id does not exist.
    async fn update_by_id(&self, id: i64, stock: &StockRequest) -> Result<u64, StorageError>;

    /// Deletes the row matching `id`. Returns the affected-row count,
    /// 0 when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<u64, StorageError>;
}

/// PostgreSQL-backed stock store.
#[derive(Clone)]
pub struct PgStockStore {
    db: DatabasePool,
}

impl PgStockStore {
    /// Creates a store on top of an established connection pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn insert(&self, stock: &StockRequest) -> Result<i64, StorageError> {
        let (stockid,): (i64,) = sqlx::query_as(
            "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
        )
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .fetch_one(self.db.pool())
        .await?;

        Ok(stockid)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Stock>, StorageError> {
        let stock = sqlx::query_as::<_, Stock>(
            "SELECT stockid, name, price, company FROM stocks WHERE stockid = $1",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(stock)
    }

    async fn fetch_all(&self) -> Result<Vec<Stock>, StorageError> {
        let stocks = sqlx::query_as::<_, Stock>(
            "SELECT stockid, name, price, company FROM stocks ORDER BY stockid",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(stocks)
    }

    async fn update_by_id(&self, id: i64, stock: &StockRequest) -> Result<u64, StorageError> {
        let result =
            sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1")
                .bind(id)
                .bind(&stock.name)
                .bind(stock.price)
                .bind(&stock.company)
                .execute(self.db.pool())
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM stocks WHERE stockid = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
