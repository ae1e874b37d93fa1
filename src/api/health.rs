//! Health probe

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, trace};

use crate::storage::Storage;

use super::helpers::json_response;

/// Recorded once at startup so the probe can report uptime.
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub resources: Option<u64>,
    pub uptime_seconds: u32,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Talks to the storage gateway directly; probes must stay simple and
/// fast, so no business logic sits in between.
pub async fn health_check(
    storage: web::Data<Arc<dyn Storage>>,
    app_start_time: web::Data<AppStartTime>,
) -> impl Responder {
    trace!("Received health check request");

    let (status, resources, error) =
        match tokio::time::timeout(Duration::from_secs(5), storage.load_all()).await {
            Ok(Ok(all)) => ("healthy", Some(all.len() as u64), None),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                ("unhealthy", None, Some(format!("database error: {}", e)))
            }
            Err(_) => {
                error!("Storage health check timeout");
                ("unhealthy", None, Some("timeout".to_string()))
            }
        };

    let now = chrono::Utc::now();
    let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

    let body = HealthResponse {
        status: status.to_string(),
        backend: storage.backend_name().to_string(),
        resources,
        uptime_seconds,
        timestamp: now.to_rfc3339(),
        error,
    };

    let (http_status, code) = if status == "healthy" {
        (actix_web::http::StatusCode::OK, "0")
    } else {
        (actix_web::http::StatusCode::SERVICE_UNAVAILABLE, "E008")
    };

    json_response(http_status, code, status, Some(body))
}
