//! In-memory menu repository.
//!
//! Holds menus in a `HashMap` behind a `tokio::sync::RwLock`. It enforces the
//! same contract as the MongoDB repository and backs the test suites and
//! local runs without a database. Nothing survives a restart.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::database::models::Menu;
use crate::database::repository::{
    require_business_id, require_menu_id, validate_new_menu, MenuPatch, MenuRepository, MenuResult,
};
use crate::error::MenuError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuRepository {
    menus: Arc<RwLock<HashMap<String, Menu>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or overwrite a menu directly, bypassing validation
    pub async fn insert(&self, menu: Menu) {
        self.menus.write().await.insert(menu.menu_id.clone(), menu);
    }

    pub async fn contains(&self, menu_id: &str) -> bool {
        self.menus.read().await.contains_key(menu_id)
    }

    pub async fn len(&self) -> usize {
        self.menus.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn create_menu(&self, menu: &Menu) -> MenuResult<()> {
        validate_new_menu(menu)?;
        let mut menus = self.menus.write().await;
        if menus.contains_key(&menu.menu_id) {
            return Err(MenuError::conflict(&menu.menu_id));
        }
        menus.insert(menu.menu_id.clone(), menu.clone());
        Ok(())
    }

    async fn get_menu_by_id(&self, menu_id: &str) -> MenuResult<Menu> {
        require_menu_id(menu_id)?;
        self.menus
            .read()
            .await
            .get(menu_id)
            .cloned()
            .ok_or_else(|| MenuError::not_found(menu_id))
    }

    async fn update_menu(&self, menu_id: &str, updates: &Menu) -> MenuResult<()> {
        require_menu_id(menu_id)?;
        let patch = MenuPatch::from_updates(updates);
        let mut menus = self.menus.write().await;
        let stored = menus
            .get_mut(menu_id)
            .ok_or_else(|| MenuError::not_found(menu_id))?;
        patch.apply_to(stored);
        Ok(())
    }

    async fn delete_menu(&self, menu_id: &str) -> MenuResult<()> {
        require_menu_id(menu_id)?;
        match self.menus.write().await.remove(menu_id) {
            Some(_) => Ok(()),
            None => Err(MenuError::not_found(menu_id)),
        }
    }

    async fn list_menus_by_business(&self, business_id: &str) -> MenuResult<Vec<Menu>> {
        require_business_id(business_id)?;
        let mut menus: Vec<Menu> = self
            .menus
            .read()
            .await
            .values()
            .filter(|m| m.business_id == business_id)
            .cloned()
            .collect();
        // HashMap order is arbitrary; keep listings stable
        menus.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.menu_id.cmp(&b.menu_id))
        });
        Ok(menus)
    }
}
