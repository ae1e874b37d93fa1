//! Identifier allocation
//!
//! Produces the final identifier for a new resource: a user-chosen vanity
//! slug validated against live ids and vanity urls, or a random
//! alphanumeric candidate re-rolled until a free slot is found. Random
//! allocation is bounded by a retry budget; the gateway's atomic insert
//! remains the uniqueness authority (the checks here only avoid wasted
//! inserts).

use std::sync::Arc;

use tracing::debug;

use crate::errors::{PastelinkError, Result};
use crate::storage::Storage;
use crate::utils::{generate_random_code, random_code_length};

pub struct IdAllocator {
    storage: Arc<dyn Storage>,
    min_length: usize,
    max_length: usize,
    max_attempts: usize,
}

impl IdAllocator {
    pub fn new(
        storage: Arc<dyn Storage>,
        min_length: usize,
        max_length: usize,
        max_attempts: usize,
    ) -> Self {
        IdAllocator {
            storage,
            min_length,
            max_length,
            max_attempts,
        }
    }

    pub fn from_config(storage: Arc<dyn Storage>) -> Self {
        let config = crate::config::get_config();
        Self::new(
            storage,
            config.id.min_length,
            config.id.max_length,
            config.id.max_attempts,
        )
    }

    /// Resolve the final id for a new resource.
    pub async fn allocate(&self, vanity_url: Option<&str>) -> Result<String> {
        match vanity_url.filter(|v| !v.is_empty()) {
            Some(vanity) => {
                if self.storage.exists_id_or_vanity(vanity).await? {
                    return Err(PastelinkError::already_exists(format!(
                        "vanity url '{}' is already in use",
                        vanity
                    )));
                }
                Ok(vanity.to_string())
            }
            None => self.allocate_random().await,
        }
    }

    async fn allocate_random(&self) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let length = random_code_length(self.min_length, self.max_length);
            let candidate = generate_random_code(length);

            if !self.storage.exists_id_or_vanity(&candidate).await? {
                return Ok(candidate);
            }

            debug!(
                "Random id '{}' collided (attempt {}/{})",
                candidate, attempt, self.max_attempts
            );
        }

        Err(PastelinkError::allocation_exhausted(format!(
            "no free identifier found after {} attempts",
            self.max_attempts
        )))
    }
}
