use async_trait::async_trait;
use sqlx::SqlitePool;

use super::KeyValueStore;
use crate::{database, error::Result, queries::local_storage_queries};

#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage_queries::get_item(&self.pool, key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        local_storage_queries::set_item(&self.pool, key, value).await
    }

    async fn check_health(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
