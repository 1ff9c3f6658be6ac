use axum::extract::State;

use crate::app::AppState;
use crate::handlers::extract::MenuIdPath;
use crate::middleware::{ApiResponse, ApiResult};

/// DELETE /menus/:id - 204 with an empty body on success
pub async fn delete(State(state): State<AppState>, MenuIdPath(menu_id): MenuIdPath) -> ApiResult<()> {
    state.menus.delete_menu(&menu_id).await?;
    Ok(ApiResponse::no_content())
}
