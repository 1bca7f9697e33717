//! Resume experience orchestration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::domain::entities::{ExperienceEntry, SCHEMA_VERSION};
use crate::domain::repositories::ExperienceRepository;
use crate::domain::validation;
use crate::error::AppError;

/// Service for creating, reading and mutating experience entries.
pub struct ExperienceService {
    repository: Arc<dyn ExperienceRepository>,
}

impl ExperienceService {
    pub fn new(repository: Arc<dyn ExperienceRepository>) -> Self {
        Self { repository }
    }

    /// Creates an experience entry from a raw request body.
    pub async fn create(&self, body: Map<String, Value>) -> Result<ExperienceEntry, AppError> {
        validation::experience::validate(&body)
            .map_err(|e| AppError::bad_request(format!("Validation error: {e}")))?;

        let mut entry: ExperienceEntry = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::internal(format!("Failed to decode experience entry: {e}")))?;
        entry.created_at = Some(Utc::now());
        entry.schema_version = SCHEMA_VERSION;

        self.repository.create(entry).await
    }

    /// Fetches one entry by id.
    pub async fn get(&self, id: &str) -> Result<ExperienceEntry, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Experience entry not found"))
    }

    /// Lists all entries, most recent position first.
    pub async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        let mut entries = self.repository.list().await?;
        entries.sort_by(|a, b| b.start_month.cmp(&a.start_month));
        Ok(entries)
    }

    /// Applies a partial update to an existing entry.
    pub async fn update(
        &self,
        id: &str,
        mut changes: Map<String, Value>,
    ) -> Result<ExperienceEntry, AppError> {
        changes.remove("id");

        if changes.is_empty() {
            return Err(AppError::bad_request("No fields to update"));
        }

        self.repository.update(id, changes).await
    }

    /// Deletes an entry. Missing and already-deleted both surface as not-found.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Experience entry not found"))
        }
    }
}
