//! DynamoDB implementation of the portfolio repository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::entities::PortfolioItem;
use crate::domain::repositories::PortfolioRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::store::{DynamoStore, StoreError};

const KEY_ATTR: &str = "id";

/// Portfolio repository over the `portfolio` table, keyed by id.
pub struct DynamoPortfolioRepository {
    store: Arc<DynamoStore>,
    table: String,
}

impl DynamoPortfolioRepository {
    pub fn new(store: Arc<DynamoStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }
}

fn to_map(item: &PortfolioItem) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::internal("Failed to serialize portfolio item")),
    }
}

fn from_map(map: Map<String, Value>) -> Result<PortfolioItem, AppError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::internal(format!("Corrupt portfolio item: {e}")))
}

#[async_trait]
impl PortfolioRepository for DynamoPortfolioRepository {
    async fn create(&self, item: PortfolioItem) -> Result<PortfolioItem, AppError> {
        let map = to_map(&item)?;

        match self.store.put_new(&self.table, KEY_ATTR, &map).await {
            Ok(()) => Ok(item),
            Err(StoreError::KeyExists) => Err(AppError::conflict(format!(
                "Portfolio item with id '{}' already exists",
                item.id
            ))),
            Err(e) => Err(AppError::internal(format!(
                "Failed to create portfolio item: {e}"
            ))),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PortfolioItem>, AppError> {
        let item = self
            .store
            .get(&self.table, KEY_ATTR, id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to read portfolio item: {e}")))?;

        item.map(from_map).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioItem>, AppError> {
        // The slug is not the partition key, so the only lookup available
        // without a secondary index is scan-and-match.
        Ok(self.list().await?.into_iter().find(|item| item.slug == slug))
    }

    async fn list(&self) -> Result<Vec<PortfolioItem>, AppError> {
        let items = self
            .store
            .scan(&self.table)
            .await
            .map_err(|e| AppError::internal(format!("Failed to scan portfolio: {e}")))?;

        Ok(items
            .into_iter()
            .filter_map(|map| match from_map(map) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("skipping undecodable portfolio row: {e}");
                    None
                }
            })
            .collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<PortfolioItem, AppError> {
        match self.store.update(&self.table, KEY_ATTR, id, &changes).await {
            Ok(item) => from_map(item),
            Err(StoreError::NotFound) => Err(AppError::not_found("Portfolio item not found")),
            Err(e) => Err(AppError::internal(format!(
                "Failed to update portfolio item: {e}"
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store
            .delete(&self.table, KEY_ATTR, id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to delete portfolio item: {e}")))
    }
}
