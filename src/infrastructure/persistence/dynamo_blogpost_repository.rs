//! DynamoDB implementation of the blog post repository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::entities::BlogPost;
use crate::domain::repositories::BlogpostRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::store::{DynamoStore, StoreError};

const KEY_ATTR: &str = "slug";

/// Blog post repository over the `blogpost` table, keyed by slug.
pub struct DynamoBlogpostRepository {
    store: Arc<DynamoStore>,
    table: String,
}

impl DynamoBlogpostRepository {
    pub fn new(store: Arc<DynamoStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }
}

fn to_map(post: &BlogPost) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(post) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::internal("Failed to serialize blogpost")),
    }
}

fn from_map(map: Map<String, Value>) -> Result<BlogPost, AppError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::internal(format!("Corrupt blogpost item: {e}")))
}

#[async_trait]
impl BlogpostRepository for DynamoBlogpostRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, AppError> {
        let item = to_map(&post)?;

        match self.store.put_new(&self.table, KEY_ATTR, &item).await {
            Ok(()) => Ok(post),
            Err(StoreError::KeyExists) => Err(AppError::conflict(format!(
                "Blogpost with slug '{}' already exists",
                post.slug
            ))),
            Err(e) => Err(AppError::internal(format!("Failed to create blogpost: {e}"))),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let item = self
            .store
            .get(&self.table, KEY_ATTR, slug)
            .await
            .map_err(|e| AppError::internal(format!("Failed to read blogpost: {e}")))?;

        item.map(from_map).transpose()
    }

    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        let items = self
            .store
            .scan(&self.table)
            .await
            .map_err(|e| AppError::internal(format!("Failed to scan blogposts: {e}")))?;

        // Rows from older schema generations may not decode; skip them
        // instead of failing the whole listing.
        Ok(items
            .into_iter()
            .filter_map(|map| match from_map(map) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("skipping undecodable blogpost row: {e}");
                    None
                }
            })
            .collect())
    }

    async fn update(&self, slug: &str, changes: Map<String, Value>) -> Result<BlogPost, AppError> {
        match self.store.update(&self.table, KEY_ATTR, slug, &changes).await {
            Ok(item) => from_map(item),
            Err(StoreError::NotFound) => Err(AppError::not_found(format!(
                "Blogpost with slug '{slug}' not found"
            ))),
            Err(e) => Err(AppError::internal(format!("Failed to update blogpost: {e}"))),
        }
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        self.store
            .delete(&self.table, KEY_ATTR, slug)
            .await
            .map_err(|e| AppError::internal(format!("Failed to delete blogpost: {e}")))
    }
}
