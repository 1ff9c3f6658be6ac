// Request extractors shared by the menu handlers.
//
// Each one rejects with an `ApiError`, so a bad header, path, or body
// produces the same `{"error": ...}` shape as service failures.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::error::ApiError;

/// Header carrying the owning business (tenant) identifier
pub const BUSINESS_ID_HEADER: &str = "x-business-id";

/// Path prefix under which a menu id is the first segment
pub const MENU_PATH_PREFIX: &str = "/menus/";

/// Non-empty `X-Business-ID` header value. Non-UTF-8 bytes are kept lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BusinessId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(BUSINESS_ID_HEADER)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .filter(|value| !value.is_empty())
            .map(BusinessId)
            .ok_or_else(|| ApiError::bad_request("X-Business-ID header is required"))
    }
}

/// Menu id taken from the first path segment after `/menus/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for MenuIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        menu_id_from_path(parts.uri.path())
            .map(|id| MenuIdPath(id.to_string()))
            .ok_or_else(|| ApiError::validation_error("menu_id is required", Some("menu_id".into())))
    }
}

/// `/menus/abc/extra` yields `abc`; `/menus/` and `/menus//x` yield nothing.
pub fn menu_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(MENU_PATH_PREFIX)
        .and_then(|rest| rest.split('/').next())
        .filter(|segment| !segment.is_empty())
}

/// JSON body whose decode failures become `400 {"error": "invalid request body"}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
