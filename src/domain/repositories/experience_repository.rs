//! Repository trait for resume experience entries.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::ExperienceEntry;
use crate::error::AppError;

/// Repository interface for experience entries, keyed by `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Creates a new entry, failing with [`AppError::Conflict`] if the id
    /// is already taken.
    async fn create(&self, entry: ExperienceEntry) -> Result<ExperienceEntry, AppError>;

    /// Point lookup by id. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> Result<Option<ExperienceEntry>, AppError>;

    /// Full-table scan. Sorting happens in memory at the caller.
    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError>;

    /// Partial update of the supplied fields plus `updated_at`.
    /// [`AppError::NotFound`] if the id does not exist.
    async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<ExperienceEntry, AppError>;

    /// Deletes by id. Returns whether an item existed and was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
