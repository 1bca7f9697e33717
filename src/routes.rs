//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - liveness probe (public)
//! - Entity reads   - public
//! - Entity writes and image upload - `x-admin-token` required
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Admin auth** - applied only to the mutating route set
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin_auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
