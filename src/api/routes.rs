//! Route configuration
//!
//! Fixed-path routes are registered before the `/{id}` catch-all so that
//! `create-text`, `create-url` and `health` never shadow as ids.

use actix_web::web;

use super::health::health_check;
use super::resources::{
    create_text, create_url, delete_all_resources, delete_resource, fetch_resource,
    get_access_count, get_resource, list_resources, update_resource,
};

/// Admin routes under `/admin/resources`.
///
/// `/{id}/access-count` is registered before `/{id}` so the suffix is
/// not swallowed by the id segment.
pub fn admin_routes() -> actix_web::Scope {
    web::scope("/admin/resources")
        .route("", web::get().to(list_resources))
        .route("", web::delete().to(delete_all_resources))
        .route("/{id}/access-count", web::get().to(get_access_count))
        .route("/{id}", web::get().to(get_resource))
        .route("/{id}", web::put().to(update_resource))
        .route("/{id}", web::delete().to(delete_resource))
}

/// Full application surface. Used by both the server binary and the
/// HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/create-text", web::post().to(create_text))
        .route("/create-url", web::post().to(create_url))
        .service(admin_routes())
        .route("/{id}", web::get().to(fetch_resource));
}
