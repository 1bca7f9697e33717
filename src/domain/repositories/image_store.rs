//! Object-store trait for image assets.

use async_trait::async_trait;

use crate::error::AppError;

/// Write-only object store for uploaded images.
///
/// # Implementations
///
/// - [`crate::infrastructure::object_store::S3ImageStore`] - S3 implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores `bytes` under `file_name` with the given content type and
    /// returns the public URL of the stored object.
    async fn put(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError>;
}
