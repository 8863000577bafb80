use axum::Json;
use serde_json::{json, Value};

/// GET /
/// The original frontend greets users off this route.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to JobBot API 🚀"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobbot-api"
    }))
}
