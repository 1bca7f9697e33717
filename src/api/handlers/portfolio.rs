//! Handlers for portfolio endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::{CreatedResponse, MessageResponse, PortfolioListResponse};
use crate::api::handlers::json_object;
use crate::domain::entities::PortfolioItem;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /portfolio` — list all items.
pub async fn portfolio_list_handler(
    State(state): State<AppState>,
) -> Result<Json<PortfolioListResponse>, AppError> {
    let portfolio = state.portfolio.list().await?;
    let count = portfolio.len();
    Ok(Json(PortfolioListResponse { portfolio, count }))
}

/// `GET /portfolio/{id}` — fetch one item.
pub async fn portfolio_get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PortfolioItem>, AppError> {
    Ok(Json(state.portfolio.get(&id).await?))
}

/// `POST /portfolio` — create an item. Admin only.
pub async fn portfolio_create_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = json_object(payload)?;
    let item = state.portfolio.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::with_id(
            "Portfolio item created successfully",
            item.id,
        )),
    ))
}

/// `PUT /portfolio/{id}` — partial update. Admin only.
pub async fn portfolio_update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PortfolioItem>, AppError> {
    let changes = json_object(payload)?;
    Ok(Json(state.portfolio.update(&id, changes).await?))
}

/// `DELETE /portfolio/{id}` — delete. Admin only.
pub async fn portfolio_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.portfolio.delete(&id).await?;
    Ok(Json(MessageResponse::new(
        "Portfolio item deleted successfully",
    )))
}
