//! Handlers for resume experience endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::{CreatedResponse, ExperienceListResponse, MessageResponse};
use crate::api::handlers::json_object;
use crate::domain::entities::ExperienceEntry;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /resume` — list entries, most recent position first.
pub async fn experience_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ExperienceListResponse>, AppError> {
    let experiences = state.experiences.list().await?;
    let count = experiences.len();
    Ok(Json(ExperienceListResponse { experiences, count }))
}

/// `GET /resume/{id}` — fetch one entry.
pub async fn experience_get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExperienceEntry>, AppError> {
    Ok(Json(state.experiences.get(&id).await?))
}

/// `POST /resume` — create an entry. Admin only.
pub async fn experience_create_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = json_object(payload)?;
    let entry = state.experiences.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::with_id(
            "Resume item created successfully",
            entry.id,
        )),
    ))
}

/// `PUT /resume/{id}` — partial update. Admin only.
pub async fn experience_update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExperienceEntry>, AppError> {
    let changes = json_object(payload)?;
    Ok(Json(state.experiences.update(&id, changes).await?))
}

/// `DELETE /resume/{id}` — delete. Admin only.
pub async fn experience_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.experiences.delete(&id).await?;
    Ok(Json(MessageResponse::new(
        "Experience entry deleted successfully",
    )))
}
