//! DTOs for the image upload endpoint.
//!
//! Field names are camelCase on the wire; this endpoint predates the
//! snake_case convention used by the entity tables.

use serde::{Deserialize, Serialize};

/// Request body for `POST /image/upload`.
#[derive(Debug, Deserialize)]
pub struct ImageUploadRequest {
    /// Base64-encoded image bytes.
    #[serde(rename = "imageBytes")]
    pub image_bytes: Option<String>,
    /// File extension, with or without the leading dot. Defaults to `.jpg`.
    #[serde(rename = "imageFileExtension")]
    pub image_file_extension: Option<String>,
}

/// Response body for a stored image.
#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imageId")]
    pub image_id: String,
}
