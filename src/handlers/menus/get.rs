use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Menu;
use crate::handlers::extract::MenuIdPath;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /menus/:id - Fetch one menu. No tenant check is applied here.
pub async fn get(State(state): State<AppState>, MenuIdPath(menu_id): MenuIdPath) -> ApiResult<Menu> {
    let menu = state.menus.get_menu(&menu_id).await?;
    Ok(ApiResponse::success(menu))
}
