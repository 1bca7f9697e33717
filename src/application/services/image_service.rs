//! Image upload orchestration: decode, name, store.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use uuid::Uuid;

use crate::domain::repositories::ImageStore;
use crate::error::AppError;
use crate::utils::content_type_for_extension;

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub image_url: String,
    pub image_id: String,
}

/// Service for uploading base64-encoded images to the object store.
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Decodes and stores an image.
    ///
    /// The object name is a fresh UUIDv4 plus the (dot-normalized) extension;
    /// the content type is derived from the extension, defaulting to JPEG.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] when the payload is not valid base64.
    pub async fn upload(
        &self,
        image_bytes_base64: &str,
        extension: Option<&str>,
    ) -> Result<UploadedImage, AppError> {
        let bytes = BASE64
            .decode(image_bytes_base64)
            .map_err(|e| AppError::bad_request(format!("Invalid base64 encoding: {e}")))?;

        let extension = normalize_extension(extension.unwrap_or(".jpg"));
        let content_type = content_type_for_extension(&extension);

        let image_id = Uuid::new_v4().to_string();
        let file_name = format!("{image_id}{extension}");

        let image_url = self.store.put(&file_name, bytes, content_type).await?;

        Ok(UploadedImage { image_url, image_id })
    }
}

/// Ensures the extension starts with a dot.
fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
