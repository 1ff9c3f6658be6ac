use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{CreateMenuRequest, Menu};
use crate::handlers::extract::{BusinessId, JsonBody};
use crate::middleware::{ApiResponse, ApiResult};

/// POST /menus - Create a menu owned by the calling business
pub async fn create(
    State(state): State<AppState>,
    BusinessId(business_id): BusinessId,
    JsonBody(request): JsonBody<CreateMenuRequest>,
) -> ApiResult<Menu> {
    let menu = state.menus.create_menu(request, &business_id).await?;
    Ok(ApiResponse::created(menu))
}
