//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AdminGate, BlogpostService, ExperienceService, ImageService, PortfolioService,
};

/// Handles to the per-entity services and the admin gate.
///
/// Built once at startup in [`crate::server::run`]; everything inside is
/// behind an `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub blogposts: Arc<BlogpostService>,
    pub portfolio: Arc<PortfolioService>,
    pub experiences: Arc<ExperienceService>,
    pub images: Arc<ImageService>,
    pub admin_gate: Arc<AdminGate>,
}

impl AppState {
    pub fn new(
        blogposts: Arc<BlogpostService>,
        portfolio: Arc<PortfolioService>,
        experiences: Arc<ExperienceService>,
        images: Arc<ImageService>,
        admin_gate: Arc<AdminGate>,
    ) -> Self {
        Self {
            blogposts,
            portfolio,
            experiences,
            images,
            admin_gate,
        }
    }
}
