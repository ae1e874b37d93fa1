use std::str::FromStr;

use crate::errors::Result;
use crate::storage::models::{Resource, ResourceType};
use migration::entities::resource;

/// Convert a SeaORM model into a `Resource`.
pub fn model_to_resource(model: resource::Model) -> Result<Resource> {
    Ok(Resource {
        resource_type: ResourceType::from_str(&model.resource_type)?,
        id: model.id,
        content: model.content,
        vanity_url: model.vanity_url,
        expiration_time: model.expiration_time,
        access_count: model.access_count.max(0) as u64,
    })
}

/// Convert a `Resource` into an ActiveModel for insertion.
pub fn resource_to_active_model(res: &Resource) -> resource::ActiveModel {
    use sea_orm::ActiveValue::Set;

    resource::ActiveModel {
        id: Set(res.id.clone()),
        content: Set(res.content.clone()),
        vanity_url: Set(res.vanity_url.clone()),
        resource_type: Set(res.resource_type.as_str().to_string()),
        expiration_time: Set(res.expiration_time),
        access_count: Set(res.access_count as i64),
    }
}
