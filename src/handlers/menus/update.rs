use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Menu, UpdateMenuRequest};
use crate::handlers::extract::{JsonBody, MenuIdPath};
use crate::middleware::{ApiResponse, ApiResult};

/// PUT /menus/:id - Partial update; absent or empty fields keep their value
pub async fn update(
    State(state): State<AppState>,
    MenuIdPath(menu_id): MenuIdPath,
    JsonBody(request): JsonBody<UpdateMenuRequest>,
) -> ApiResult<Menu> {
    let menu = state.menus.update_menu(&menu_id, request).await?;
    Ok(ApiResponse::success(menu))
}
