//! DynamoDB repository implementations.
//!
//! [`DynamoStore`] is the shared key-value adapter (marshalling, conditional
//! writes, dynamic updates, paginated scans); the `Dynamo*Repository` types
//! are thin typed layers over it implementing the domain repository traits.

pub mod attrs;
pub mod dynamo_blogpost_repository;
pub mod dynamo_experience_repository;
pub mod dynamo_portfolio_repository;
pub mod store;
pub mod update;

pub use dynamo_blogpost_repository::DynamoBlogpostRepository;
pub use dynamo_experience_repository::DynamoExperienceRepository;
pub use dynamo_portfolio_repository::DynamoPortfolioRepository;
pub use store::{DynamoStore, StoreError};
