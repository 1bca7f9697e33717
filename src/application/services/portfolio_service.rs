//! Portfolio orchestration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::domain::entities::{PortfolioItem, SCHEMA_VERSION};
use crate::domain::repositories::PortfolioRepository;
use crate::domain::validation;
use crate::error::AppError;

/// Service for creating, reading and mutating portfolio items.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepository>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Creates a portfolio item from a raw request body.
    ///
    /// The id is the storage key and its uniqueness is enforced by the
    /// store's conditional write. The slug is unique in the product sense
    /// only; it gets a best-effort availability check here, which two
    /// concurrent creates can still race past.
    pub async fn create(&self, body: Map<String, Value>) -> Result<PortfolioItem, AppError> {
        validation::portfolio::validate(&body)
            .map_err(|e| AppError::bad_request(format!("Validation error: {e}")))?;

        let mut item: PortfolioItem = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::internal(format!("Failed to decode portfolio item: {e}")))?;

        if self.repository.find_by_slug(&item.slug).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Portfolio item with slug '{}' already exists",
                item.slug
            )));
        }

        item.created_at = Some(Utc::now());
        item.schema_version = SCHEMA_VERSION;

        self.repository.create(item).await
    }

    /// Fetches one item by id.
    pub async fn get(&self, id: &str) -> Result<PortfolioItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Portfolio item not found"))
    }

    /// Lists all items in scan order.
    pub async fn list(&self) -> Result<Vec<PortfolioItem>, AppError> {
        self.repository.list().await
    }

    /// Applies a partial update to an existing item.
    pub async fn update(
        &self,
        id: &str,
        mut changes: Map<String, Value>,
    ) -> Result<PortfolioItem, AppError> {
        changes.remove("id");

        if changes.is_empty() {
            return Err(AppError::bad_request("No fields to update"));
        }

        self.repository.update(id, changes).await
    }

    /// Deletes an item. Missing and already-deleted both surface as not-found.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Portfolio item not found"))
        }
    }
}
