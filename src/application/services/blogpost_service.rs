//! Blog post orchestration: validate, persist, list, mutate.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::domain::entities::{BlogPost, BlogPostSummary, SCHEMA_VERSION};
use crate::domain::repositories::BlogpostRepository;
use crate::domain::validation;
use crate::error::AppError;

/// Service for creating, reading and mutating blog posts.
pub struct BlogpostService {
    repository: Arc<dyn BlogpostRepository>,
}

impl BlogpostService {
    pub fn new(repository: Arc<dyn BlogpostRepository>) -> Self {
        Self { repository }
    }

    /// Creates a blog post from a raw request body.
    ///
    /// The body is validated first (field presence, types, content-block
    /// structure), then canonicalized through the typed entity — fields the
    /// schema does not know are dropped. `created_at` and the schema stamp
    /// are server-assigned.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] on a bad body, [`AppError::Conflict`] if the
    /// slug is taken.
    pub async fn create(&self, body: Map<String, Value>) -> Result<BlogPost, AppError> {
        validation::blogpost::validate(&body)
            .map_err(|e| AppError::bad_request(format!("Validation error: {e}")))?;

        let mut post: BlogPost = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::internal(format!("Failed to decode blogpost: {e}")))?;
        post.created_at = Some(Utc::now());
        post.schema_version = SCHEMA_VERSION;

        self.repository.create(post).await
    }

    /// Fetches one post by slug.
    pub async fn get(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Blogpost with slug '{slug}' not found")))
    }

    /// Lists posts as summaries, with optional tag filter and sorting.
    ///
    /// `tag` matches any of a post's tags, ignoring case. `sort` is `date`
    /// (default) or `title` (case-insensitive); anything else leaves scan
    /// order. `order` is `desc` (default) or ascending for any other value.
    pub async fn list(
        &self,
        tag: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<BlogPostSummary>, AppError> {
        let posts = self.repository.list().await?;

        let mut summaries: Vec<BlogPostSummary> = posts
            .iter()
            .filter(|post| tag.is_none_or(|t| post.has_tag(t)))
            .map(BlogPost::to_summary)
            .collect();

        let descending = order.unwrap_or("desc") == "desc";
        match sort.unwrap_or("date") {
            "date" => summaries.sort_by(|a, b| a.date.cmp(&b.date)),
            "title" => {
                summaries.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
            _ => return Ok(summaries),
        }
        if descending {
            summaries.reverse();
        }

        Ok(summaries)
    }

    /// Applies a partial update to an existing post.
    ///
    /// The immutable key field is stripped from the body; whatever remains
    /// is written verbatim, and `updated_at` is refreshed by the store.
    pub async fn update(
        &self,
        slug: &str,
        mut changes: Map<String, Value>,
    ) -> Result<BlogPost, AppError> {
        changes.remove("slug");

        if changes.is_empty() {
            return Err(AppError::bad_request("No fields to update"));
        }

        self.repository.update(slug, changes).await
    }

    /// Deletes a post. Missing and already-deleted both surface as not-found.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        if self.repository.delete(slug).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Blogpost with slug '{slug}' not found"
            )))
        }
    }
}
