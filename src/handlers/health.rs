use axum::{http::Uri, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;

/// GET /health - Liveness only; the store is not consulted
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any method a route does not register
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::not_found("not found")
}
