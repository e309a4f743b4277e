//! In-memory stock store for tests and database-free runs.

use crate::models::{Stock, StockRequest};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use super::store::{StockStore, StorageError};

#[cfg(test)]
mod tests;

/// In-memory [`StockStore`] implementation.
///
/// Assigns ascending ids starting at 1, mirroring the auto-incrementing
/// primary key of the Postgres table. Ids are never reused, even after
/// a delete.
#[derive(Default)]
pub struct MemoryStockStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    stocks: BTreeMap<i64, Stock>,
    last_id: i64,
}

impl MemoryStockStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn insert(&self, stock: &StockRequest) -> Result<i64, StorageError> {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.stocks.insert(
            id,
            Stock {
                stockid: id,
                name: stock.name.clone(),
                price: stock.price,
                company: stock.company.clone(),
            },
        );
        Ok(id)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Stock>, StorageError> {
        Ok(self.inner.read().stocks.get(&id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Stock>, StorageError> {
        Ok(self.inner.read().stocks.values().cloned().collect())
    }

    async fn update_by_id(&self, id: i64, stock: &StockRequest) -> Result<u64, StorageError> {
        let mut inner = self.inner.write();
        match inner.stocks.get_mut(&id) {
            Some(existing) => {
                existing.name = stock.name.clone();
                existing.price = stock.price;
                existing.company = stock.company.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StorageError> {
        let removed = self.inner.write().stocks.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
