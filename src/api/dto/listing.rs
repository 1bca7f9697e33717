//! DTOs for the listing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BlogPostSummary, ExperienceEntry, PortfolioItem};

/// Query parameters for `GET /blogpost`.
///
/// All parameters are optional; defaults are newest-first by date with no
/// tag filter.
#[derive(Debug, Default, Deserialize)]
pub struct BlogpostListQuery {
    /// Case-insensitive tag filter.
    pub tag: Option<String>,
    /// Sort field: `date` (default) or `title`.
    pub sort: Option<String>,
    /// Sort direction: `desc` (default) or `asc`.
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogpostListResponse {
    pub blogposts: Vec<BlogPostSummary>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PortfolioListResponse {
    pub portfolio: Vec<PortfolioItem>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ExperienceListResponse {
    pub experiences: Vec<ExperienceEntry>,
    pub count: usize,
}
