//! Repository trait for portfolio item data access.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::PortfolioItem;
use crate::error::AppError;

/// Repository interface for portfolio items, keyed by `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Creates a new portfolio item, failing with [`AppError::Conflict`]
    /// if the id is already taken.
    async fn create(&self, item: PortfolioItem) -> Result<PortfolioItem, AppError>;

    /// Point lookup by id. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> Result<Option<PortfolioItem>, AppError>;

    /// Lookup by slug, which is unique in the product sense but not the
    /// storage key; implemented as a scan plus in-memory match.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioItem>, AppError>;

    /// Full-table scan.
    async fn list(&self) -> Result<Vec<PortfolioItem>, AppError>;

    /// Partial update of the supplied fields plus `updated_at`.
    /// [`AppError::NotFound`] if the id does not exist.
    async fn update(&self, id: &str, changes: Map<String, Value>)
    -> Result<PortfolioItem, AppError>;

    /// Deletes by id. Returns whether an item existed and was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
