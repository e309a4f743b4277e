//! Database module for PostgreSQL connectivity and stock storage.

mod memory;
mod pool;
mod store;

pub use memory::MemoryStockStore;
pub use pool::DatabasePool;
pub use store::{PgStockStore, StockStore, StorageError};
