#![allow(dead_code)]

//! Shared test fixtures: in-memory repositories and a router factory.
//!
//! The real repositories talk to DynamoDB and S3; handler tests double them
//! with `HashMap`-backed fakes that honor the same contracts (conditional
//! create, dynamic partial update with `updated_at`, delete reporting
//! existence).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, middleware};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Map, Value};

use folio_api::api;
use folio_api::api::middleware::admin_auth;
use folio_api::application::services::{
    AdminGate, BlogpostService, ExperienceService, ImageService, PortfolioService,
};
use folio_api::domain::entities::{BlogPost, ExperienceEntry, PortfolioItem};
use folio_api::domain::repositories::{
    BlogpostRepository, ExperienceRepository, ImageStore, PortfolioRepository,
};
use folio_api::error::AppError;
use folio_api::state::AppState;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Applies a dynamic field-change map to a serialized entity, the way the
/// real store's update expression would, and refreshes `updated_at`.
fn apply_changes<T: serde::Serialize + serde::de::DeserializeOwned>(
    current: &T,
    changes: Map<String, Value>,
) -> Result<T, AppError> {
    let mut map = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        _ => return Err(AppError::internal("serialize failed")),
    };

    for (field, value) in changes {
        map.insert(field, value);
    }
    map.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );

    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::internal(format!("updated item no longer decodes: {e}")))
}

#[derive(Default)]
pub struct InMemoryBlogposts {
    items: Mutex<HashMap<String, BlogPost>>,
}

#[async_trait]
impl BlogpostRepository for InMemoryBlogposts {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, AppError> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&post.slug) {
            return Err(AppError::conflict(format!(
                "Blogpost with slug '{}' already exists",
                post.slug
            )));
        }
        items.insert(post.slug.clone(), post.clone());
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.items.lock().unwrap().get(slug).cloned())
    }

    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, slug: &str, changes: Map<String, Value>) -> Result<BlogPost, AppError> {
        let mut items = self.items.lock().unwrap();
        let current = items.get(slug).ok_or_else(|| {
            AppError::not_found(format!("Blogpost with slug '{slug}' not found"))
        })?;

        let updated = apply_changes(current, changes)?;
        items.insert(slug.to_string(), updated);
        Ok(items[slug].clone())
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.items.lock().unwrap().remove(slug).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPortfolio {
    items: Mutex<HashMap<String, PortfolioItem>>,
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolio {
    async fn create(&self, item: PortfolioItem) -> Result<PortfolioItem, AppError> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&item.id) {
            return Err(AppError::conflict(format!(
                "Portfolio item with id '{}' already exists",
                item.id
            )));
        }
        items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PortfolioItem>, AppError> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioItem>, AppError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .find(|item| item.slug == slug)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<PortfolioItem>, AppError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<PortfolioItem, AppError> {
        let mut items = self.items.lock().unwrap();
        let current = items
            .get(id)
            .ok_or_else(|| AppError::not_found("Portfolio item not found"))?;

        let updated = apply_changes(current, changes)?;
        items.insert(id.to_string(), updated);
        Ok(items[id].clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.items.lock().unwrap().remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryExperience {
    items: Mutex<HashMap<String, ExperienceEntry>>,
}

#[async_trait]
impl ExperienceRepository for InMemoryExperience {
    async fn create(&self, entry: ExperienceEntry) -> Result<ExperienceEntry, AppError> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&entry.id) {
            return Err(AppError::conflict(format!(
                "Resume item with id '{}' already exists",
                entry.id
            )));
        }
        items.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ExperienceEntry>, AppError> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
    ) -> Result<ExperienceEntry, AppError> {
        let mut items = self.items.lock().unwrap();
        let current = items
            .get(id)
            .ok_or_else(|| AppError::not_found("Experience entry not found"))?;

        let updated = apply_changes(current, changes)?;
        items.insert(id.to_string(), updated);
        Ok(items[id].clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.items.lock().unwrap().remove(id).is_some())
    }
}

/// One recorded object-store write.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Image store fake that records every put.
#[derive(Default)]
pub struct RecordingImageStore {
    pub objects: Mutex<Vec<StoredObject>>,
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn put(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.objects.lock().unwrap().push(StoredObject {
            file_name: file_name.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });

        Ok(format!(
            "https://test-bucket.s3.us-east-1.amazonaws.com/{file_name}"
        ))
    }
}

/// Everything a handler test needs: the state plus handles to the fakes.
pub struct TestContext {
    pub state: AppState,
    pub blogposts: Arc<InMemoryBlogposts>,
    pub portfolio: Arc<InMemoryPortfolio>,
    pub experiences: Arc<InMemoryExperience>,
    pub images: Arc<RecordingImageStore>,
}

/// Builds an `AppState` over fresh in-memory fakes, gated by
/// [`TEST_ADMIN_TOKEN`].
pub fn create_test_context() -> TestContext {
    let blogposts = Arc::new(InMemoryBlogposts::default());
    let portfolio = Arc::new(InMemoryPortfolio::default());
    let experiences = Arc::new(InMemoryExperience::default());
    let images = Arc::new(RecordingImageStore::default());

    let state = AppState::new(
        Arc::new(BlogpostService::new(blogposts.clone())),
        Arc::new(PortfolioService::new(portfolio.clone())),
        Arc::new(ExperienceService::new(experiences.clone())),
        Arc::new(ImageService::new(images.clone())),
        Arc::new(AdminGate::new(Some(TEST_ADMIN_TOKEN.to_string()))),
    );

    TestContext {
        state,
        blogposts,
        portfolio,
        experiences,
        images,
    }
}

/// Builds a test server with the full route table and admin middleware,
/// mirroring `routes::app_router` minus path normalization.
pub fn make_server(state: AppState) -> TestServer {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    let app = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}
