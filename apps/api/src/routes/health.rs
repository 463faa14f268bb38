use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner with version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Tailor API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
