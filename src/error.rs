// Domain and HTTP API error types
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors produced by the menu service and repositories.
///
/// The set is closed; handlers map each variant to a status code through
/// `From<MenuError> for ApiError` rather than inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A required field was missing or empty
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("menu not found")]
    NotFound { menu_id: String },

    #[error("menu with this ID already exists")]
    Conflict { menu_id: String },

    /// Any other persistence failure, timeouts included
    #[error("store error: {0}")]
    Store(String),
}

impl MenuError {
    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        MenuError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn menu_id_required() -> Self {
        Self::required("menu_id", "menu_id is required")
    }

    pub fn business_id_required() -> Self {
        Self::required("business_id", "business_id is required")
    }

    pub fn name_required() -> Self {
        Self::required("name", "menu name is required")
    }

    pub fn not_found(menu_id: impl Into<String>) -> Self {
        MenuError::NotFound {
            menu_id: menu_id.into(),
        }
    }

    pub fn conflict(menu_id: impl Into<String>) -> Self {
        MenuError::Conflict {
            menu_id: menu_id.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        MenuError::Store(message.into())
    }
}

impl From<mongodb::error::Error> for MenuError {
    fn from(err: mongodb::error::Error) -> Self {
        MenuError::Store(err.to_string())
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError { message: String, field: Option<String> },
    InvalidJson(String),

    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 408 Request Timeout
    RequestTimeout,

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::InvalidJson(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::RequestTimeout => "request timed out",
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Response body: always `{"error": "<message>"}`
    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(message: impl Into<String>, field: Option<String>) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field,
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::Validation { field, message } => {
                ApiError::validation_error(message, Some(field.to_string()))
            }
            err @ MenuError::NotFound { .. } => ApiError::not_found(err.to_string()),
            // A duplicate id on create is a server-side failure, reported verbatim
            err @ MenuError::Conflict { .. } => {
                tracing::error!("menu create conflict: {:?}", err);
                ApiError::internal_server_error(err.to_string())
            }
            MenuError::Store(msg) => {
                // Log the real error but return a generic message
                tracing::error!("menu store error: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection.body_text());
        ApiError::invalid_json("invalid request body")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::ValidationError {
            field: Some(field),
            message,
        } = &self
        {
            tracing::debug!("validation failed on {}: {}", field, message);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_errors_map_to_status_codes() {
        let cases = [
            (MenuError::name_required(), StatusCode::BAD_REQUEST),
            (MenuError::not_found("m1"), StatusCode::NOT_FOUND),
            (MenuError::conflict("m1"), StatusCode::INTERNAL_SERVER_ERROR),
            (MenuError::store("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status_code(), status);
        }
    }

    #[test]
    fn validation_messages_keep_their_wording() {
        assert_eq!(MenuError::name_required().to_string(), "menu name is required");
        assert_eq!(MenuError::menu_id_required().to_string(), "menu_id is required");
        assert_eq!(MenuError::business_id_required().to_string(), "business_id is required");
        assert_eq!(MenuError::not_found("x").to_string(), "menu not found");
        assert_eq!(
            MenuError::conflict("x").to_string(),
            "menu with this ID already exists"
        );
    }

    #[test]
    fn duplicate_id_is_a_server_error_with_its_message() {
        let api: ApiError = MenuError::conflict("m1").into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api.to_json(),
            json!({ "error": "menu with this ID already exists" })
        );
    }

    #[test]
    fn store_errors_hide_details_from_clients() {
        let api: ApiError = MenuError::store("connection reset by peer").into();
        assert!(!api.message().contains("connection reset"));
        assert_eq!(
            api.to_json()["error"],
            "An error occurred while processing your request"
        );
    }

    #[test]
    fn error_body_has_single_error_key() {
        let api = ApiError::not_found("menu not found");
        assert_eq!(api.to_json(), json!({ "error": "menu not found" }));
    }
}
