//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure`. Mock implementations are generated with
//! `mockall` for unit tests; integration tests use in-memory fakes instead
//! (there is no local test database to point a real repository at).

pub mod blogpost_repository;
pub mod experience_repository;
pub mod image_store;
pub mod portfolio_repository;

pub use blogpost_repository::BlogpostRepository;
pub use experience_repository::ExperienceRepository;
pub use image_store::ImageStore;
pub use portfolio_repository::PortfolioRepository;

#[cfg(test)]
pub use blogpost_repository::MockBlogpostRepository;
#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use portfolio_repository::MockPortfolioRepository;
