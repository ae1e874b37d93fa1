//! Storage gateway
//!
//! The `Storage` trait is the single source of truth for persisted
//! resources; every mutation is durable before the call returns. The
//! service layer never caches records between calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

pub mod backend;
pub mod memory;
pub mod models;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStorage;
pub use models::{AccessCountOp, Resource, ResourceFilter, ResourceType};

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Resource>>;
    async fn load_all(&self) -> Result<Vec<Resource>>;
    async fn load_filtered(&self, filter: &ResourceFilter) -> Result<Vec<Resource>>;

    /// True when `candidate` is live as an id or as another resource's
    /// vanity slug. Allocation pre-check only; `insert` is the authority.
    async fn exists_id_or_vanity(&self, candidate: &str) -> Result<bool>;

    /// Atomic insert-if-absent. A duplicate id fails with `AlreadyExists`;
    /// this is the authoritative uniqueness signal under concurrency.
    async fn insert(&self, resource: Resource) -> Result<()>;

    async fn update_content(&self, id: &str, content: &str) -> Result<Resource>;

    /// Atomic in-place increment, never read-modify-write.
    async fn increment_access_count(&self, id: &str) -> Result<()>;

    async fn remove(&self, id: &str) -> Result<Resource>;
    async fn remove_all(&self) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<dyn Storage>> {
        let config = crate::config::get_config();
        let database_url = &config.database.url;

        if database_url == "memory" {
            return Ok(Arc::new(MemoryStorage::new()));
        }

        let backend_type = backend::infer_backend_from_url(database_url)?;
        let storage = SeaOrmStorage::new(database_url, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
