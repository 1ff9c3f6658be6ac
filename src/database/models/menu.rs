use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu as exposed over the HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub business_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Menu as persisted in the `menus` collection, keyed by `_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub business_id: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<Menu> for MenuDocument {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.menu_id,
            name: menu.name,
            description: menu.description,
            business_id: menu.business_id,
            created_at: menu.created_at,
            updated_at: menu.updated_at,
            is_active: menu.is_active,
        }
    }
}

impl From<MenuDocument> for Menu {
    fn from(doc: MenuDocument) -> Self {
        Self {
            menu_id: doc.id,
            name: doc.name,
            description: doc.description,
            business_id: doc.business_id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            is_active: doc.is_active,
        }
    }
}

/// POST /menus body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMenuRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// PUT /menus/:id body. Empty strings count as "not provided", so a field
/// cannot be cleared through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenuRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateMenuRequest {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Menu {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Menu {
            menu_id: "m1".to_string(),
            name: "Lunch".to_string(),
            description: "Daily lunch menu".to_string(),
            business_id: "biz-123".to_string(),
            created_at: at,
            updated_at: at,
            is_active: true,
        }
    }

    #[test]
    fn api_shape_uses_menu_id() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["menu_id"], "m1");
        assert_eq!(value["business_id"], "biz-123");
        assert_eq!(value["is_active"], true);
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn document_shape_uses_underscore_id_and_bson_dates() {
        let doc = bson::to_document(&MenuDocument::from(sample())).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "m1");
        assert!(doc.get_datetime("created_at").is_ok());
        assert!(doc.get("menu_id").is_none());

        let back: MenuDocument = bson::from_document(doc).unwrap();
        assert_eq!(Menu::from(back), sample());
    }

    #[test]
    fn update_request_treats_empty_strings_as_absent() {
        let req: UpdateMenuRequest =
            serde_json::from_str(r#"{"name":"","description":"C"}"#).unwrap();
        assert_eq!(req.name(), None);
        assert_eq!(req.description(), Some("C"));
        assert_eq!(req.is_active, None);

        let req: UpdateMenuRequest = serde_json::from_str(r#"{"is_active":false}"#).unwrap();
        assert_eq!(req.is_active, Some(false));
    }

    #[test]
    fn create_request_fields_default_to_empty() {
        let req: CreateMenuRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert!(req.description.is_empty());
    }
}
