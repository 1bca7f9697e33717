//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health` — reports that the process is up and serving.
///
/// Store reachability is deliberately not probed here; a health poller
/// hitting DynamoDB on every check would be billable traffic.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
