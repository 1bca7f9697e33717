//! Middleware for the API routes.

pub mod admin_auth;
pub mod tracing;
