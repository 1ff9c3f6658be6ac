use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Menu;
use crate::handlers::extract::BusinessId;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /menus - All menus of the calling business, `[]` when there are none
pub async fn list(
    State(state): State<AppState>,
    BusinessId(business_id): BusinessId,
) -> ApiResult<Vec<Menu>> {
    let menus = state.menus.list_menus_by_business(&business_id).await?;
    Ok(ApiResponse::success(menus))
}
