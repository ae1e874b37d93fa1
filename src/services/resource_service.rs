//! Resource management service
//!
//! Business logic for creating, fetching, listing, updating and deleting
//! resources. Holds no state between calls: every decision re-reads the
//! storage gateway, and the gateway's atomic insert is the uniqueness
//! authority (allocation pre-checks only avoid wasted work).

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{PastelinkError, Result};
use crate::services::allocator::IdAllocator;
use crate::storage::models::{Resource, ResourceFilter, ResourceType};
use crate::storage::Storage;
use crate::utils::expiration::{normalize_expiration, ExpirationInput};
use crate::utils::validate_url;

/// Incoming resource before an id has been settled.
#[derive(Debug, Clone, Default)]
pub struct ResourceDraft {
    /// Explicit identifier; empty or absent means let the allocator pick.
    pub id: Option<String>,
    pub content: String,
    /// User-requested vanity slug, retained on the stored record.
    pub vanity_url: Option<String>,
    pub expiration_time: Option<ExpirationInput>,
}

/// What a successful fetch resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Text resource: the payload is the content itself.
    Content(String),
    /// Link resource: the caller should redirect to this URL.
    Redirect(String),
}

pub struct ResourceService {
    storage: Arc<dyn Storage>,
    allocator: IdAllocator,
}

impl ResourceService {
    pub fn new(storage: Arc<dyn Storage>, allocator: IdAllocator) -> Self {
        ResourceService { storage, allocator }
    }

    pub fn from_config(storage: Arc<dyn Storage>) -> Self {
        let allocator = IdAllocator::from_config(storage.clone());
        ResourceService::new(storage, allocator)
    }

    /// Create a text resource.
    pub async fn create_text(&self, draft: ResourceDraft) -> Result<Resource> {
        self.create(draft, ResourceType::Text).await
    }

    /// Create a link resource. The content must be a valid http(s) URL.
    pub async fn create_url(&self, draft: ResourceDraft) -> Result<Resource> {
        self.create(draft, ResourceType::Link).await
    }

    // Both creation entry points share this pipeline; only the type tag
    // differs.
    async fn create(&self, draft: ResourceDraft, resource_type: ResourceType) -> Result<Resource> {
        if resource_type == ResourceType::Link {
            validate_url(&draft.content)
                .map_err(|e| PastelinkError::validation(e.to_string()))?;
        }

        let vanity_url = draft.vanity_url.filter(|v| !v.is_empty());

        // An explicit id wins over the vanity slug; the slug is kept as
        // metadata either way, so it must be free as well.
        let id = match draft.id.as_deref().filter(|s| !s.is_empty()) {
            Some(explicit) => {
                if self.storage.exists_id_or_vanity(explicit).await? {
                    return Err(PastelinkError::already_exists(format!(
                        "resource '{}' already exists",
                        explicit
                    )));
                }
                if let Some(vanity) = vanity_url.as_deref()
                    && vanity != explicit
                    && self.storage.exists_id_or_vanity(vanity).await?
                {
                    return Err(PastelinkError::already_exists(format!(
                        "vanity url '{}' is already in use",
                        vanity
                    )));
                }
                explicit.to_string()
            }
            None => self.allocator.allocate(vanity_url.as_deref()).await?,
        };

        let expiration_time = normalize_expiration(draft.expiration_time)?;

        let resource = Resource {
            id,
            content: draft.content,
            vanity_url,
            resource_type,
            expiration_time,
            access_count: 0,
        };

        // Pre-checks above are advisory; a concurrent creation racing us
        // surfaces here as AlreadyExists.
        self.storage.insert(resource.clone()).await?;

        info!(
            "ResourceService: created {} resource '{}'",
            resource.resource_type, resource.id
        );
        Ok(resource)
    }

    /// Resolve an id to its content (text) or redirect target (link),
    /// counting the access. The only operation that mutates
    /// `access_count`. Expired resources are still served; expiration is
    /// advisory metadata.
    pub async fn fetch(&self, id: &str) -> Result<FetchOutcome> {
        let resource = self
            .storage
            .get(id)
            .await?
            .ok_or_else(|| PastelinkError::not_found(format!("resource '{}' not found", id)))?;

        self.storage.increment_access_count(id).await?;
        debug!("ResourceService: fetched '{}'", id);

        Ok(match resource.resource_type {
            ResourceType::Text => FetchOutcome::Content(resource.content),
            ResourceType::Link => FetchOutcome::Redirect(resource.content),
        })
    }

    /// Look up a resource without counting an access.
    pub async fn get(&self, id: &str) -> Result<Resource> {
        self.storage
            .get(id)
            .await?
            .ok_or_else(|| PastelinkError::not_found(format!("resource '{}' not found", id)))
    }

    pub async fn list_all(&self) -> Result<Vec<Resource>> {
        self.storage.load_all().await
    }

    /// List resources matching every supplied predicate. An empty filter
    /// behaves exactly like `list_all`.
    pub async fn list_filtered(&self, filter: ResourceFilter) -> Result<Vec<Resource>> {
        if filter.is_empty() {
            return self.list_all().await;
        }
        self.storage.load_filtered(&filter).await
    }

    pub async fn access_count(&self, id: &str) -> Result<u64> {
        Ok(self.get(id).await?.access_count)
    }

    pub async fn update_content(&self, id: &str, new_content: &str) -> Result<Resource> {
        let updated = self.storage.update_content(id, new_content).await?;
        info!("ResourceService: updated '{}'", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Resource> {
        let removed = self.storage.remove(id).await?;
        info!("ResourceService: deleted '{}'", id);
        Ok(removed)
    }

    pub async fn delete_all(&self) -> Result<()> {
        self.storage.remove_all().await?;
        info!("ResourceService: deleted all resources");
        Ok(())
    }
}
