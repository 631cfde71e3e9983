//! Named key/value entries standing in for the browser's local storage.
//!
//! The catalog keeps exactly one entry here (the image overrides), but the
//! adapter is key-agnostic so other small pieces of state can share it.

mod memory_storage;
mod sqlite_storage;

use async_trait::async_trait;

use crate::error::Result;

pub use memory_storage::MemoryStorage;
pub use sqlite_storage::SqliteStorage;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Readiness probe; backends without a connection are always healthy.
    async fn check_health(&self) -> Result<()> {
        Ok(())
    }
}
