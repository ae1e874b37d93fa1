//! Response building helpers shared by the API handlers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use std::str::FromStr;

use crate::errors::{PastelinkError, Result};
use crate::storage::models::{AccessCountOp, ResourceFilter, ResourceType};

use super::types::{ApiResponse, ListResourcesQuery};

pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code.to_string(),
            message: message.into(),
            data,
        })
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, "0", "OK", Some(data))
}

pub fn created_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::CREATED, "0", "created", Some(data))
}

/// Maps a `PastelinkError` onto its HTTP status and stable code.
pub fn error_from_pastelink(err: &PastelinkError) -> HttpResponse {
    json_response::<()>(err.http_status(), err.code(), err.message(), None)
}

/// Unified Result to HttpResponse conversion for 200-class handlers.
pub fn api_result<T: Serialize>(result: Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_pastelink(&e),
    }
}

/// Builds a typed filter from the raw listing query string.
pub fn parse_filter(query: &ListResourcesQuery) -> Result<ResourceFilter> {
    let resource_type = match query.resource_type.as_deref() {
        Some(raw) => Some(ResourceType::from_str(raw).map_err(|_| {
            PastelinkError::invalid_query(format!(
                "unknown resource type '{}', expected 'text' or 'link'",
                raw
            ))
        })?),
        None => None,
    };

    let access_count = match (query.access_op.as_deref(), query.access_count) {
        (None, None) => None,
        (None, Some(count)) => Some((AccessCountOp::Eq, count)),
        (Some(raw), Some(count)) => Some((AccessCountOp::from_str(raw)?, count)),
        (Some(raw), None) => {
            return Err(PastelinkError::invalid_query(format!(
                "access_op '{}' given without access_count",
                raw
            )));
        }
    };

    Ok(ResourceFilter {
        resource_type,
        access_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(t: Option<&str>, op: Option<&str>, count: Option<u64>) -> ListResourcesQuery {
        ListResourcesQuery {
            resource_type: t.map(String::from),
            access_op: op.map(String::from),
            access_count: count,
        }
    }

    #[test]
    fn empty_query_is_empty_filter() {
        let filter = parse_filter(&query(None, None, None)).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn count_without_op_defaults_to_equality() {
        let filter = parse_filter(&query(None, None, Some(3))).unwrap();
        assert_eq!(filter.access_count, Some((AccessCountOp::Eq, 3)));
    }

    #[test]
    fn op_without_count_is_rejected() {
        let err = parse_filter(&query(None, Some(">"), None)).unwrap_err();
        assert!(matches!(err, PastelinkError::InvalidQuery(_)));
    }

    #[test]
    fn unknown_op_is_rejected() {
        let err = parse_filter(&query(None, Some("!="), Some(1))).unwrap_err();
        assert!(matches!(err, PastelinkError::InvalidQuery(_)));
    }

    #[test]
    fn unknown_type_is_rejected_as_query_error() {
        let err = parse_filter(&query(Some("image"), None, None)).unwrap_err();
        assert!(matches!(err, PastelinkError::InvalidQuery(_)));
    }

    #[test]
    fn type_and_count_combine() {
        let filter = parse_filter(&query(Some("link"), Some(">="), Some(10))).unwrap();
        assert_eq!(filter.resource_type, Some(ResourceType::Link));
        assert_eq!(filter.access_count, Some((AccessCountOp::Ge, 10)));
    }
}
