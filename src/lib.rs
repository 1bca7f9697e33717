//! # Folio API
//!
//! Content backend for a personal site: blog posts, portfolio items and
//! resume experience entries stored in DynamoDB (one table per entity, one
//! partition key per item), with image assets in S3.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, payload validation and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration and the admin gate
//! - **Infrastructure Layer** ([`infrastructure`]) - DynamoDB and S3 integrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Polymorphic content blocks validated as a tagged sum type
//! - Conditional-write creates: duplicate keys fail at the store, not by
//!   read-then-write
//! - Dynamic partial updates with a typed expression builder
//! - Constant-time admin-token gate on every mutating route
//!
//! ## Quick Start
//!
//! ```bash
//! export S3_BUCKET="my-site-images"
//! export SECRET_TOKEN="$(openssl rand -hex 32)"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AdminGate, BlogpostService, ExperienceService, ImageService, PortfolioService,
    };
    pub use crate::domain::entities::{BlogPost, ContentBlock, ExperienceEntry, PortfolioItem};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
