//! Application state management.

use crate::db::{DatabasePool, MemoryStockStore, PgStockStore, StockStore};
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stock storage handle.
    pub store: Arc<dyn StockStore>,
}

impl AppState {
    /// Creates a new application state over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }

    /// Creates a new application state backed by PostgreSQL.
    #[must_use]
    pub fn with_database(db: DatabasePool) -> Self {
        Self::new(Arc::new(PgStockStore::new(db)))
    }

    /// Creates a new application state backed by the in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStockStore::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
