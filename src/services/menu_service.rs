use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::database::models::{CreateMenuRequest, Menu, UpdateMenuRequest};
use crate::database::repository::{MenuRepository, MenuResult};
use crate::error::MenuError;

/// Business rules for menus: required fields, tenant association, identifier
/// and timestamp generation, and partial-update merging.
#[derive(Clone)]
pub struct MenuService {
    repo: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    /// Create a menu owned by `business_id`
    pub async fn create_menu(
        &self,
        request: CreateMenuRequest,
        business_id: &str,
    ) -> MenuResult<Menu> {
        if request.name.is_empty() {
            return Err(MenuError::name_required());
        }
        if business_id.is_empty() {
            return Err(MenuError::business_id_required());
        }

        let now = now();
        let menu = Menu {
            menu_id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            business_id: business_id.to_string(),
            created_at: now,
            updated_at: now,
            is_active: true,
        };

        self.repo.create_menu(&menu).await?;
        info!("Created menu {} for business {}", menu.menu_id, menu.business_id);
        Ok(menu)
    }

    pub async fn get_menu(&self, menu_id: &str) -> MenuResult<Menu> {
        if menu_id.is_empty() {
            return Err(MenuError::menu_id_required());
        }
        self.repo.get_menu_by_id(menu_id).await
    }

    /// Read-modify-write update. The returned menu is the merged copy held
    /// here, not a fresh read from the store.
    pub async fn update_menu(&self, menu_id: &str, request: UpdateMenuRequest) -> MenuResult<Menu> {
        if menu_id.is_empty() {
            return Err(MenuError::menu_id_required());
        }

        let mut menu = self.repo.get_menu_by_id(menu_id).await?;

        if let Some(name) = request.name() {
            menu.name = name.to_string();
        }
        if let Some(description) = request.description() {
            menu.description = description.to_string();
        }
        if let Some(is_active) = request.is_active {
            menu.is_active = is_active;
        }
        menu.updated_at = now();

        self.repo.update_menu(menu_id, &menu).await?;
        info!("Updated menu {}", menu_id);
        Ok(menu)
    }

    pub async fn delete_menu(&self, menu_id: &str) -> MenuResult<()> {
        if menu_id.is_empty() {
            return Err(MenuError::menu_id_required());
        }
        self.repo.delete_menu(menu_id).await?;
        info!("Deleted menu {}", menu_id);
        Ok(())
    }

    pub async fn list_menus_by_business(&self, business_id: &str) -> MenuResult<Vec<Menu>> {
        if business_id.is_empty() {
            return Err(MenuError::business_id_required());
        }
        let menus = self.repo.list_menus_by_business(business_id).await?;
        debug!("Listed {} menus for business {}", menus.len(), business_id);
        Ok(menus)
    }
}

/// Current time at millisecond precision, the resolution BSON dates keep
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
