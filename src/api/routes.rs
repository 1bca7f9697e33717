//! API route configuration.
//!
//! Routes are split by mutability: reads are public, every mutating route
//! goes behind the admin-token middleware (applied by the caller, see
//! [`crate::routes::app_router`]).

use crate::api::handlers::{
    blogpost_create_handler, blogpost_delete_handler, blogpost_get_handler, blogpost_list_handler,
    blogpost_update_handler, experience_create_handler, experience_delete_handler,
    experience_get_handler, experience_list_handler, experience_update_handler,
    image_upload_handler, portfolio_create_handler, portfolio_delete_handler,
    portfolio_get_handler, portfolio_list_handler, portfolio_update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Read-only routes, reachable without the admin token.
///
/// - `GET /blogpost`         - list posts (tag filter, sort)
/// - `GET /blogpost/{slug}`  - fetch one post
/// - `GET /portfolio`        - list portfolio items
/// - `GET /portfolio/{id}`   - fetch one item
/// - `GET /resume`           - list experience entries
/// - `GET /resume/{id}`      - fetch one entry
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/blogpost", get(blogpost_list_handler))
        .route("/blogpost/{slug}", get(blogpost_get_handler))
        .route("/portfolio", get(portfolio_list_handler))
        .route("/portfolio/{id}", get(portfolio_get_handler))
        .route("/resume", get(experience_list_handler))
        .route("/resume/{id}", get(experience_get_handler))
}

/// Mutating routes, gated by the admin token.
///
/// - `POST   /blogpost`          - create
/// - `PUT    /blogpost/{slug}`   - partial update
/// - `DELETE /blogpost/{slug}`   - delete
/// - `POST   /portfolio`         - create
/// - `PUT    /portfolio/{id}`    - partial update
/// - `DELETE /portfolio/{id}`    - delete
/// - `POST   /resume`            - create
/// - `PUT    /resume/{id}`       - partial update
/// - `DELETE /resume/{id}`       - delete
/// - `POST   /image/upload`      - store an image
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/blogpost", post(blogpost_create_handler))
        .route(
            "/blogpost/{slug}",
            put(blogpost_update_handler).delete(blogpost_delete_handler),
        )
        .route("/portfolio", post(portfolio_create_handler))
        .route(
            "/portfolio/{id}",
            put(portfolio_update_handler).delete(portfolio_delete_handler),
        )
        .route("/resume", post(experience_create_handler))
        .route(
            "/resume/{id}",
            put(experience_update_handler).delete(experience_delete_handler),
        )
        .route("/image/upload", post(image_upload_handler))
}
