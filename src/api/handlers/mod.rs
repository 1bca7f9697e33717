//! HTTP request handlers.
//!
//! Handlers stay thin: extract, delegate to a service, shape the response.

pub mod blogposts;
pub mod experiences;
pub mod health;
pub mod images;
pub mod portfolio;

pub use blogposts::{
    blogpost_create_handler, blogpost_delete_handler, blogpost_get_handler, blogpost_list_handler,
    blogpost_update_handler,
};
pub use experiences::{
    experience_create_handler, experience_delete_handler, experience_get_handler,
    experience_list_handler, experience_update_handler,
};
pub use health::health_handler;
pub use images::image_upload_handler;
pub use portfolio::{
    portfolio_create_handler, portfolio_delete_handler, portfolio_get_handler,
    portfolio_list_handler, portfolio_update_handler,
};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Unwraps a JSON body extraction into an object map.
///
/// A body that failed to parse maps to the same message for every endpoint;
/// a body that parsed but is not an object gets its own message, since the
/// field validators only operate on objects.
pub(crate) fn json_object(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, AppError> {
    let Json(value) = payload.map_err(|_| AppError::bad_request("Invalid JSON in request body"))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::bad_request("Request body must be a JSON object")),
    }
}
