//! Resume experience entry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::blogpost::SCHEMA_VERSION;

fn schema_version_default() -> u32 {
    SCHEMA_VERSION
}

/// One position on the resume, keyed by `id`.
///
/// An empty `end_month` means the position is current; the field is still
/// required so "current" is an explicit statement rather than an omission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub image_url: String,
    pub start_month: String,
    pub end_month: String,
    pub description: String,
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExperienceEntry {
    /// Returns true if the entry has no end month, i.e. a current position.
    pub fn is_current(&self) -> bool {
        self.end_month.is_empty()
    }
}
