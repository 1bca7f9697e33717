//! Repository trait for blog post data access.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::BlogPost;
use crate::error::AppError;

/// Repository interface for blog posts, keyed by slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::DynamoBlogpostRepository`] - DynamoDB implementation
/// - Mocks available with `cfg(test)`; integration tests use an in-memory fake
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogpostRepository: Send + Sync {
    /// Creates a new blog post.
    ///
    /// The write is conditional on the slug being free, so two concurrent
    /// creates of the same slug cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists and
    /// [`AppError::Internal`] on store errors.
    async fn create(&self, post: BlogPost) -> Result<BlogPost, AppError>;

    /// Point lookup by slug. Absence is `Ok(None)`, not an error.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;

    /// Full-table scan. Filtering and sorting happen in memory at the caller.
    async fn list(&self) -> Result<Vec<BlogPost>, AppError>;

    /// Partially updates a post: exactly the supplied fields are written,
    /// plus a refreshed `updated_at`. Returns the post-update item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug does not exist (the update
    /// never upserts) and [`AppError::Internal`] on store errors.
    async fn update(&self, slug: &str, changes: Map<String, Value>) -> Result<BlogPost, AppError>;

    /// Deletes by slug. Returns whether an item existed and was removed.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;
}
