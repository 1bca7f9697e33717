//! Handlers for blog post endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::{BlogpostListQuery, BlogpostListResponse, CreatedResponse, MessageResponse};
use crate::api::handlers::json_object;
use crate::domain::entities::BlogPost;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /blogpost` — list posts as summaries, with optional tag filter and
/// sorting (`?tag=`, `?sort=date|title`, `?order=asc|desc`).
pub async fn blogpost_list_handler(
    State(state): State<AppState>,
    Query(query): Query<BlogpostListQuery>,
) -> Result<Json<BlogpostListResponse>, AppError> {
    let blogposts = state
        .blogposts
        .list(
            query.tag.as_deref(),
            query.sort.as_deref(),
            query.order.as_deref(),
        )
        .await?;

    let count = blogposts.len();
    Ok(Json(BlogpostListResponse { blogposts, count }))
}

/// `GET /blogpost/{slug}` — fetch one post.
pub async fn blogpost_get_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    Ok(Json(state.blogposts.get(&slug).await?))
}

/// `POST /blogpost` — create a post. Admin only.
pub async fn blogpost_create_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = json_object(payload)?;
    let post = state.blogposts.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::with_slug(
            "Blogpost created successfully",
            post.slug,
        )),
    ))
}

/// `PUT /blogpost/{slug}` — partial update. Admin only.
pub async fn blogpost_update_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BlogPost>, AppError> {
    let changes = json_object(payload)?;
    Ok(Json(state.blogposts.update(&slug, changes).await?))
}

/// `DELETE /blogpost/{slug}` — delete. Admin only.
pub async fn blogpost_delete_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.blogposts.delete(&slug).await?;
    Ok(Json(MessageResponse::new("Blogpost deleted successfully")))
}
