use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    error::{ErrorKind, WriteFailure},
    Collection,
};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Menu, MenuDocument};
use crate::database::repository::{
    require_business_id, require_menu_id, validate_new_menu, MenuPatch, MenuRepository, MenuResult,
};
use crate::error::MenuError;

/// MongoDB server code for unique index violations
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB-backed menu repository over the `menus` collection
#[derive(Clone, Debug)]
pub struct MongoMenuRepository {
    collection: Collection<MenuDocument>,
}

impl MongoMenuRepository {
    pub const COLLECTION: &'static str = "menus";

    /// Upper bound on every collection operation
    pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(manager: &DatabaseManager) -> Self {
        Self {
            collection: manager.database().collection(Self::COLLECTION),
        }
    }

    /// Run a store call under `OPERATION_TIMEOUT`. Elapsed calls surface as a
    /// plain store error.
    async fn bounded<T, F>(op: &'static str, fut: F) -> MenuResult<T>
    where
        F: Future<Output = Result<T, mongodb::error::Error>>,
    {
        Self::bounded_with(op, fut, MenuError::from).await
    }

    /// Like `bounded`, with a caller-supplied mapping for driver errors
    async fn bounded_with<T, F, M>(op: &'static str, fut: F, map_err: M) -> MenuResult<T>
    where
        F: Future<Output = Result<T, mongodb::error::Error>>,
        M: FnOnce(mongodb::error::Error) -> MenuError,
    {
        match tokio::time::timeout(Self::OPERATION_TIMEOUT, fut).await {
            Ok(result) => result.map_err(map_err),
            Err(_) => Err(MenuError::store(format!(
                "{op} timed out after {:?}",
                Self::OPERATION_TIMEOUT
            ))),
        }
    }
}

/// Build the `$set` document for a partial update
pub fn update_document(patch: &MenuPatch) -> Document {
    let mut fields = Document::new();
    if let Some(name) = &patch.name {
        fields.insert("name", name.as_str());
    }
    if let Some(description) = &patch.description {
        fields.insert("description", description.as_str());
    }
    fields.insert("is_active", patch.is_active);
    fields.insert(
        "updated_at",
        Bson::DateTime(mongodb::bson::DateTime::from_chrono(patch.updated_at)),
    );
    doc! { "$set": fields }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl MenuRepository for MongoMenuRepository {
    async fn create_menu(&self, menu: &Menu) -> MenuResult<()> {
        validate_new_menu(menu)?;
        let document = MenuDocument::from(menu.clone());

        Self::bounded_with(
            "insert",
            self.collection.insert_one(document, None),
            |err| {
                if is_duplicate_key(&err) {
                    MenuError::conflict(&menu.menu_id)
                } else {
                    err.into()
                }
            },
        )
        .await?;
        debug!("inserted menu {}", menu.menu_id);
        Ok(())
    }

    async fn get_menu_by_id(&self, menu_id: &str) -> MenuResult<Menu> {
        require_menu_id(menu_id)?;
        let found = Self::bounded(
            "find",
            self.collection.find_one(doc! { "_id": menu_id }, None),
        )
        .await?;
        found
            .map(Menu::from)
            .ok_or_else(|| MenuError::not_found(menu_id))
    }

    async fn update_menu(&self, menu_id: &str, updates: &Menu) -> MenuResult<()> {
        require_menu_id(menu_id)?;
        let update = update_document(&MenuPatch::from_updates(updates));

        let previous = Self::bounded(
            "update",
            self.collection
                .find_one_and_update(doc! { "_id": menu_id }, update, None),
        )
        .await?;
        match previous {
            Some(_) => Ok(()),
            None => Err(MenuError::not_found(menu_id)),
        }
    }

    async fn delete_menu(&self, menu_id: &str) -> MenuResult<()> {
        require_menu_id(menu_id)?;
        let result = Self::bounded(
            "delete",
            self.collection.delete_one(doc! { "_id": menu_id }, None),
        )
        .await?;
        if result.deleted_count == 0 {
            return Err(MenuError::not_found(menu_id));
        }
        Ok(())
    }

    async fn list_menus_by_business(&self, business_id: &str) -> MenuResult<Vec<Menu>> {
        require_business_id(business_id)?;
        let documents: Vec<MenuDocument> = Self::bounded("list", async {
            let cursor = self
                .collection
                .find(doc! { "business_id": business_id }, None)
                .await?;
            cursor.try_collect::<Vec<MenuDocument>>().await
        })
        .await?;
        Ok(documents.into_iter().map(Menu::from).collect())
    }
}
