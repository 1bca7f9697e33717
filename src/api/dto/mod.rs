//! Data Transfer Objects for API requests and responses.
//!
//! Create and update bodies are deliberately *not* typed DTOs: they arrive
//! as raw JSON objects so the validation layer can report the first failing
//! field with a precise message instead of a serde parse error.

pub mod common;
pub mod image;
pub mod listing;

pub use common::{CreatedResponse, MessageResponse};
pub use image::{ImageUploadRequest, ImageUploadResponse};
pub use listing::{
    BlogpostListQuery, BlogpostListResponse, ExperienceListResponse, PortfolioListResponse,
};
