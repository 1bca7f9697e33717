//! Blog post entity and the simplified listing projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ContentBlock;

/// Schema generation stamped onto every item on the write path.
///
/// Readers ignore attributes they do not know, so older rows without the stamp
/// still deserialize; the stamp exists so a future migration can tell
/// generations apart.
pub const SCHEMA_VERSION: u32 = 1;

fn schema_version_default() -> u32 {
    SCHEMA_VERSION
}

/// A blog post, keyed by its URL slug.
///
/// `created_at` is assigned once by the service on create; `updated_at` is
/// refreshed by the store on every partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: Vec<ContentBlock>,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Returns true if any tag matches `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Projects the post to the shape returned by the listing endpoint.
    pub fn to_summary(&self) -> BlogPostSummary {
        BlogPostSummary {
            title_image_url: self.title_image_url.clone().unwrap_or_default(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            summary: self.summary.clone().unwrap_or_default(),
            author: self.author.clone(),
            date: self.date.clone(),
        }
    }
}

/// Listing projection: enough to render an index page, nothing more.
///
/// Absent optional fields surface as empty strings, matching what the
/// frontend has always consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub title_image_url: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub date: String,
}
