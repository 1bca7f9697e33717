//! S3 implementation of the image store.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use crate::domain::repositories::ImageStore;
use crate::error::AppError;

/// Stores image bytes in an S3 bucket and hands back the public URL.
///
/// ACLs are not set; public read access is expected to come from the bucket
/// policy.
pub struct S3ImageStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    /// Creates a store for `bucket`.
    ///
    /// `public_base_url` overrides the URL prefix returned for stored
    /// objects; when `None`, the standard virtual-hosted S3 form
    /// `https://{bucket}.s3.{region}.amazonaws.com` is used.
    pub fn new(client: Client, bucket: impl Into<String>, public_base_url: Option<String>) -> Self {
        let bucket = bucket.into();
        let public_base_url = public_base_url.unwrap_or_else(|| {
            let region = client
                .config()
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "us-east-1".to_string());
            format!("https://{bucket}.s3.{region}.amazonaws.com")
        });

        Self {
            client,
            bucket,
            public_base_url,
        }
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(file_name)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Failed to upload image: {e}")))?;

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        ))
    }
}
