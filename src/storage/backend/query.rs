//! Read-only database operations for `SeaOrmStorage`.

use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter};

use super::SeaOrmStorage;
use super::converters::model_to_resource;
use crate::errors::{PastelinkError, Result};
use crate::storage::models::{AccessCountOp, Resource, ResourceFilter};

use migration::entities::resource;

fn filter_condition(filter: &ResourceFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(rt) = filter.resource_type {
        condition = condition.add(resource::Column::ResourceType.eq(rt.as_str()));
    }

    if let Some((op, value)) = filter.access_count {
        let value = value as i64;
        condition = condition.add(match op {
            AccessCountOp::Eq => resource::Column::AccessCount.eq(value),
            AccessCountOp::Lt => resource::Column::AccessCount.lt(value),
            AccessCountOp::Gt => resource::Column::AccessCount.gt(value),
            AccessCountOp::Le => resource::Column::AccessCount.lte(value),
            AccessCountOp::Ge => resource::Column::AccessCount.gte(value),
        });
    }

    condition
}

impl SeaOrmStorage {
    pub(super) async fn find_one(&self, id: &str) -> Result<Option<Resource>> {
        let model = resource::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!("failed to query resource: {}", e))
            })?;

        model.map(model_to_resource).transpose()
    }

    pub(super) async fn find_all(&self) -> Result<Vec<Resource>> {
        let models = resource::Entity::find().all(&self.db).await.map_err(|e| {
            PastelinkError::database_operation(format!("failed to load resources: {}", e))
        })?;

        models.into_iter().map(model_to_resource).collect()
    }

    pub(super) async fn find_filtered(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        let models = resource::Entity::find()
            .filter(filter_condition(filter))
            .all(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!("failed to filter resources: {}", e))
            })?;

        models.into_iter().map(model_to_resource).collect()
    }

    pub(super) async fn candidate_in_use(&self, candidate: &str) -> Result<bool> {
        let count = resource::Entity::find()
            .filter(
                Condition::any()
                    .add(resource::Column::Id.eq(candidate))
                    .add(resource::Column::VanityUrl.eq(candidate)),
            )
            .count(&self.db)
            .await
            .map_err(|e| {
                PastelinkError::database_operation(format!(
                    "failed to check identifier availability: {}",
                    e
                ))
            })?;

        Ok(count > 0)
    }
}
