//! Write operations for `SeaOrmStorage`.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, ExprTrait, QueryFilter, SqlErr};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::resource_to_active_model;
use crate::errors::{PastelinkError, Result};
use crate::storage::Storage;
use crate::storage::models::{Resource, ResourceFilter};

use migration::entities::resource;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn get(&self, id: &str) -> Result<Option<Resource>> {
        self.find_one(id).await
    }

    async fn load_all(&self) -> Result<Vec<Resource>> {
        self.find_all().await
    }

    async fn load_filtered(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        self.find_filtered(filter).await
    }

    async fn exists_id_or_vanity(&self, candidate: &str) -> Result<bool> {
        self.candidate_in_use(candidate).await
    }

    async fn insert(&self, res: Resource) -> Result<()> {
        let id = res.id.clone();
        let active_model = resource_to_active_model(&res);

        // No ON CONFLICT clause: the primary key violation IS the
        // uniqueness signal.
        match resource::Entity::insert(active_model).exec(&self.db).await {
            Ok(_) => {
                info!("Resource stored: {}", id);
                Ok(())
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(
                    PastelinkError::already_exists(format!("resource '{}' already exists", id)),
                ),
                _ => Err(PastelinkError::database_operation(format!(
                    "failed to insert resource '{}': {}",
                    id, e
                ))),
            },
        }
    }

    async fn update_content(&self, id: &str, content: &str) -> Result<Resource> {
        let result = resource::Entity::update_many()
            .col_expr(resource::Column::Content, Expr::value(content))
            .filter(resource::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!("failed to update resource: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            )));
        }

        info!("Resource updated: {}", id);
        self.find_one(id).await?.ok_or_else(|| {
            PastelinkError::database_operation(format!(
                "resource '{}' vanished during update",
                id
            ))
        })
    }

    async fn increment_access_count(&self, id: &str) -> Result<()> {
        // Single UPDATE ... SET access_count = access_count + 1, so
        // concurrent fetches never lose increments.
        let result = resource::Entity::update_many()
            .col_expr(
                resource::Column::AccessCount,
                Expr::col(resource::Column::AccessCount).add(1),
            )
            .filter(resource::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!(
                    "failed to increment access count: {}",
                    e
                ))
            })?;

        if result.rows_affected == 0 {
            return Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Resource> {
        let removed = self.find_one(id).await?.ok_or_else(|| {
            PastelinkError::not_found(format!("resource '{}' not found", id))
        })?;

        let result = resource::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!("failed to delete resource: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(PastelinkError::not_found(format!(
                "resource '{}' not found",
                id
            )));
        }

        info!("Resource deleted: {}", id);
        Ok(removed)
    }

    async fn remove_all(&self) -> Result<()> {
        resource::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!("failed to delete resources: {}", e))
            })?;

        info!("All resources deleted");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        self.backend_name
    }
}
