//! Liveness check.

use axum::Json;
use serde_json::{json, Value};

/// GET /healthz - Returns 200 immediately without touching the store.
#[axum::debug_handler]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
