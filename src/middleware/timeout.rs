use axum::BoxError;

use crate::error::ApiError;

/// Turn errors from the timeout layer into JSON error responses
pub async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request exceeded the configured timeout");
        ApiError::RequestTimeout
    } else {
        tracing::error!("Unhandled middleware error: {}", err);
        ApiError::internal_server_error("An error occurred while processing your request")
    }
}
