//! Handler for image uploads.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::api::dto::{ImageUploadRequest, ImageUploadResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /image/upload` — store a base64-encoded image in the object store.
/// Admin only.
pub async fn image_upload_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImageUploadRequest>, JsonRejection>,
) -> Result<Json<ImageUploadResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::bad_request("Invalid JSON in request body"))?;

    let image_bytes = request
        .image_bytes
        .ok_or_else(|| AppError::bad_request("Missing required field: imageBytes"))?;

    let uploaded = state
        .images
        .upload(&image_bytes, request.image_file_extension.as_deref())
        .await?;

    Ok(Json(ImageUploadResponse {
        image_url: uploaded.image_url,
        image_id: uploaded.image_id,
    }))
}
