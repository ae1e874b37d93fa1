//! API request and response types

use serde::{Deserialize, Serialize};

use crate::utils::expiration::ExpirationInput;

/// Uniform JSON envelope for every API response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    /// "0" on success, stable `Exxx` code on failure.
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostResource {
    /// Explicit id; absent or empty means allocate one.
    pub id: Option<String>,
    pub content: String,
    pub vanity_url: Option<String>,
    pub expiration_time: Option<ExpirationInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateResource {
    pub content: String,
}

/// Query string for the admin listing endpoint.
///
/// `access_op` is one of `=`, `<`, `>`, `<=`, `>=` and applies to
/// `access_count`; a count without an operator defaults to equality.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ListResourcesQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub access_op: Option<String>,
    pub access_count: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccessCountResponse {
    pub id: String,
    pub access_count: u64,
}
