//! Business logic services for the application layer.

pub mod admin_gate;
pub mod blogpost_service;
pub mod experience_service;
pub mod image_service;
pub mod portfolio_service;

pub use admin_gate::AdminGate;
pub use blogpost_service::BlogpostService;
pub use experience_service::ExperienceService;
pub use image_service::{ImageService, UploadedImage};
pub use portfolio_service::PortfolioService;
