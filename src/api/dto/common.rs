//! Response shapes shared across entity endpoints.

use serde::Serialize;

/// `{"message": ...}` body used by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by create endpoints: a confirmation plus the storage key
/// of the new item.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CreatedResponse {
    pub fn with_slug(message: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            slug: Some(slug.into()),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            slug: None,
            id: Some(id.into()),
        }
    }
}
