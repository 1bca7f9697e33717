//! DynamoDB implementation of the experience repository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::entities::ExperienceEntry;
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::store::{DynamoStore, StoreError};

const KEY_ATTR: &str = "id";

/// Experience repository over the `experience` table, keyed by id.
pub struct DynamoExperienceRepository {
    store: Arc<DynamoStore>,
    table: String,
}

impl DynamoExperienceRepository {
    pub fn new(store: Arc<DynamoStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }
}

fn to_map(entry: &ExperienceEntry) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(entry) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::internal("Failed to serialize experience entry")),
    }
}

fn from_map(map: Map<String, Value>) -> Result<ExperienceEntry, AppError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::internal(format!("Corrupt experience item: {e}")))
}

#[async_trait]
impl ExperienceRepository for DynamoExperienceRepository {
    async fn create(&self, entry: ExperienceEntry) -> Result<ExperienceEntry, AppError> {
        let map = to_map(&entry)?;

        match self.store.put_new(&self.table, KEY_ATTR, &map).await {
            Ok(()) => Ok(entry),
            Err(StoreError::KeyExists) => Err(AppError::conflict(format!(
                "Resume item with id '{}' already exists",
                entry.id
            ))),
            Err(e) => Err(AppError::internal(format!(
                "Failed to create resume item: {e}"
            ))),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ExperienceEntry>, AppError> {
        let item = self
            .store
            .get(&self.table, KEY_ATTR, id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to read experience entry: {e}")))?;

        item.map(from_map).transpose()
    }

    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        let items = self
            .store
            .scan(&self.table)
            .await
            .map_err(|e| AppError::internal(format!("Failed to scan experience: {e}")))?;

        Ok(items
            .into_iter()
            .filter_map(|map| match from_map(map) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("skipping undecodable experience row: {e}");
                    None
                }
            })
            .collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<ExperienceEntry, AppError> {
        match self.store.update(&self.table, KEY_ATTR, id, &changes).await {
            Ok(item) => from_map(item),
            Err(StoreError::NotFound) => Err(AppError::not_found("Experience entry not found")),
            Err(e) => Err(AppError::internal(format!(
                "Failed to update experience entry: {e}"
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store
            .delete(&self.table, KEY_ATTR, id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to delete experience entry: {e}")))
    }
}
