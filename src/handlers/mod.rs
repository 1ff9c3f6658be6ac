// handlers/mod.rs - HTTP layer
//
// Handlers only translate between HTTP and the menu service: they pull the
// tenant header, path id and JSON body, then map results onto status codes.

pub mod extract;
pub mod health;
pub mod menus;

pub use health::{health, method_not_allowed, not_found};
pub use menus::{menu_create, menu_delete, menu_get, menu_list, menu_update};
