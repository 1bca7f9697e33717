//! Admin-token middleware for mutating routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the shared admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Authorizes a mutating request via the `x-admin-token` header.
///
/// Delegates the comparison to [`crate::application::services::AdminGate`];
/// any failure (missing header, non-UTF8 header, wrong token, unconfigured
/// secret) produces the gate's uniform rejection.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    state.admin_gate.authorize(token)?;

    Ok(next.run(req).await)
}
