//! In-memory storage backend
//!
//! DashMap-backed implementation of the storage gateway. Used by the test
//! suite and selectable with `database.url = "memory"`. Uniqueness relies
//! on the map's entry API, access counting on per-entry mutation under the
//! shard lock, so the same atomicity guarantees hold as in the database
//! backends (minus durability).

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use super::models::{Resource, ResourceFilter};
use super::Storage;
use crate::errors::{PastelinkError, Result};

#[derive(Default)]
pub struct MemoryStorage {
    resources: DashMap<String, Resource>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            resources: DashMap::new(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, id: &str) -> Result<Option<Resource>> {
        Ok(self.resources.get(id).map(|r| r.clone()))
    }

    async fn load_all(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.iter().map(|r| r.value().clone()).collect())
    }

    async fn load_filtered(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        Ok(self
            .resources
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect())
    }

    async fn exists_id_or_vanity(&self, candidate: &str) -> Result<bool> {
        if self.resources.contains_key(candidate) {
            return Ok(true);
        }
        Ok(self
            .resources
            .iter()
            .any(|r| r.value().vanity_url.as_deref() == Some(candidate)))
    }

    async fn insert(&self, resource: Resource) -> Result<()> {
        match self.resources.entry(resource.id.clone()) {
            Entry::Occupied(_) => Err(PastelinkError::already_exists(format!(
                "resource '{}' already exists",
                resource.id
            ))),
            Entry::Vacant(entry) => {
                info!("Resource stored: {}", resource.id);
                entry.insert(resource);
                Ok(())
            }
        }
    }

    async fn update_content(&self, id: &str, content: &str) -> Result<Resource> {
        match self.resources.get_mut(id) {
            Some(mut entry) => {
                entry.content = content.to_string();
                Ok(entry.clone())
            }
            None => Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            ))),
        }
    }

    async fn increment_access_count(&self, id: &str) -> Result<()> {
        match self.resources.get_mut(id) {
            Some(mut entry) => {
                entry.access_count += 1;
                Ok(())
            }
            None => Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            ))),
        }
    }

    async fn remove(&self, id: &str) -> Result<Resource> {
        match self.resources.remove(id) {
            Some((_, resource)) => {
                info!("Resource deleted: {}", id);
                Ok(resource)
            }
            None => Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            ))),
        }
    }

    async fn remove_all(&self) -> Result<()> {
        self.resources.clear();
        info!("All resources deleted");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
