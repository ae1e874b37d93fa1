use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PastelinkError;

/// What a resource holds: a text snippet, or a URL to redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Text,
    Link,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Text => "text",
            ResourceType::Link => "link",
        }
    }
}

impl FromStr for ResourceType {
    type Err = PastelinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ResourceType::Text),
            "link" => Ok(ResourceType::Link),
            other => Err(PastelinkError::validation(format!(
                "unknown resource type '{}', expected 'text' or 'link'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored text snippet or shortened URL, addressable by its unique id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub content: String,
    pub vanity_url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub expiration_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub access_count: u64,
}

/// Comparator for access-count filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCountOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl AccessCountOp {
    pub fn matches(&self, count: u64, value: u64) -> bool {
        match self {
            AccessCountOp::Eq => count == value,
            AccessCountOp::Lt => count < value,
            AccessCountOp::Gt => count > value,
            AccessCountOp::Le => count <= value,
            AccessCountOp::Ge => count >= value,
        }
    }
}

impl FromStr for AccessCountOp {
    type Err = PastelinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(AccessCountOp::Eq),
            "<" => Ok(AccessCountOp::Lt),
            ">" => Ok(AccessCountOp::Gt),
            "<=" => Ok(AccessCountOp::Le),
            ">=" => Ok(AccessCountOp::Ge),
            other => Err(PastelinkError::invalid_query(format!(
                "unsupported comparator '{}', expected one of =, <, >, <=, >=",
                other
            ))),
        }
    }
}

/// Typed filter for admin listing. Empty filter matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceFilter {
    pub resource_type: Option<ResourceType>,
    pub access_count: Option<(AccessCountOp, u64)>,
}

impl ResourceFilter {
    pub fn is_empty(&self) -> bool {
        self.resource_type.is_none() && self.access_count.is_none()
    }

    /// Whether a resource satisfies every supplied predicate.
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(rt) = self.resource_type
            && resource.resource_type != rt
        {
            return false;
        }
        if let Some((op, value)) = self.access_count
            && !op.matches(resource.access_count, value)
        {
            return false;
        }
        true
    }
}
