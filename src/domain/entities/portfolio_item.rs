//! Portfolio item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ContentBlock;
use crate::domain::entities::blogpost::SCHEMA_VERSION;

fn schema_version_default() -> u32 {
    SCHEMA_VERSION
}

/// A portfolio entry, keyed by `id`.
///
/// `slug` is unique in the product sense but is not the storage key; see
/// `PortfolioService::create` for how the distinction is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: Vec<ContentBlock>,
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
