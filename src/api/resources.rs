//! Resource API handlers
//!
//! Public surface: create a text or link resource, resolve an id. Admin
//! surface: list (with optional filter), inspect, update, delete.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::{FetchOutcome, ResourceDraft, ResourceService};

use super::helpers::{api_result, created_response, error_from_pastelink, parse_filter};
use super::types::{AccessCountResponse, ListResourcesQuery, PostResource, UpdateResource};

impl From<PostResource> for ResourceDraft {
    fn from(body: PostResource) -> Self {
        ResourceDraft {
            id: body.id,
            content: body.content,
            vanity_url: body.vanity_url,
            expiration_time: body.expiration_time,
        }
    }
}

pub async fn create_text(
    body: web::Json<PostResource>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    trace!("API: create text resource request");
    match service.create_text(body.into_inner().into()).await {
        Ok(resource) => created_response(resource),
        Err(e) => error_from_pastelink(&e),
    }
}

pub async fn create_url(
    body: web::Json<PostResource>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    trace!("API: create link resource request");
    match service.create_url(body.into_inner().into()).await {
        Ok(resource) => created_response(resource),
        Err(e) => error_from_pastelink(&e),
    }
}

/// Resolve an id: text resources answer with their content, link
/// resources with a temporary redirect. Either way the access counts.
pub async fn fetch_resource(
    path: web::Path<String>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    let id = path.into_inner();
    match service.fetch(&id).await {
        Ok(FetchOutcome::Content(content)) => HttpResponse::Ok()
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(content),
        Ok(FetchOutcome::Redirect(target)) => HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header(("Location", target))
            .finish(),
        Err(e) => error_from_pastelink(&e),
    }
}

pub async fn list_resources(
    query: web::Query<ListResourcesQuery>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    trace!("Admin API: list resources with filters: {:?}", query);
    let filter = match parse_filter(&query) {
        Ok(filter) => filter,
        Err(e) => return error_from_pastelink(&e),
    };
    api_result(service.list_filtered(filter).await)
}

pub async fn get_resource(
    path: web::Path<String>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    api_result(service.get(&path.into_inner()).await)
}

pub async fn get_access_count(
    path: web::Path<String>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    let id = path.into_inner();
    api_result(
        service
            .access_count(&id)
            .await
            .map(|access_count| AccessCountResponse { id, access_count }),
    )
}

pub async fn update_resource(
    path: web::Path<String>,
    body: web::Json<UpdateResource>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Admin API: update request for '{}'", id);
    api_result(service.update_content(&id, &body.content).await)
}

pub async fn delete_resource(
    path: web::Path<String>,
    service: web::Data<Arc<ResourceService>>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Admin API: delete request for '{}'", id);
    api_result(service.delete(&id).await)
}

pub async fn delete_all_resources(service: web::Data<Arc<ResourceService>>) -> impl Responder {
    info!("Admin API: delete all resources");
    api_result(service.delete_all().await.map(|_| serde_json::json!({})))
}
