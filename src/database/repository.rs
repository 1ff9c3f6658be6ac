use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::database::models::Menu;
use crate::error::MenuError;

pub type MenuResult<T> = Result<T, MenuError>;

/// Persistence operations the menu service depends on.
///
/// Implementations validate their own inputs so that no write reaches the
/// backing store with an empty key.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn create_menu(&self, menu: &Menu) -> MenuResult<()>;
    async fn get_menu_by_id(&self, menu_id: &str) -> MenuResult<Menu>;
    async fn update_menu(&self, menu_id: &str, updates: &Menu) -> MenuResult<()>;
    async fn delete_menu(&self, menu_id: &str) -> MenuResult<()>;
    async fn list_menus_by_business(&self, business_id: &str) -> MenuResult<Vec<Menu>>;
}

/// Partial field set written by `update_menu`.
///
/// Name and description are only written when non-empty; the active flag and
/// update timestamp are always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl MenuPatch {
    pub fn from_updates(updates: &Menu) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: non_empty(&updates.name),
            description: non_empty(&updates.description),
            is_active: updates.is_active,
            updated_at: updates.updated_at,
        }
    }

    pub fn apply_to(&self, menu: &mut Menu) {
        if let Some(name) = &self.name {
            menu.name = name.clone();
        }
        if let Some(description) = &self.description {
            menu.description = description.clone();
        }
        menu.is_active = self.is_active;
        menu.updated_at = self.updated_at;
    }
}

/// Reject menus missing any of the fields a stored record must carry
pub fn validate_new_menu(menu: &Menu) -> MenuResult<()> {
    if menu.menu_id.is_empty() {
        return Err(MenuError::menu_id_required());
    }
    if menu.name.is_empty() {
        return Err(MenuError::name_required());
    }
    if menu.business_id.is_empty() {
        return Err(MenuError::business_id_required());
    }
    Ok(())
}

pub fn require_menu_id(menu_id: &str) -> MenuResult<()> {
    if menu_id.is_empty() {
        return Err(MenuError::menu_id_required());
    }
    Ok(())
}

pub fn require_business_id(business_id: &str) -> MenuResult<()> {
    if business_id.is_empty() {
        return Err(MenuError::business_id_required());
    }
    Ok(())
}
