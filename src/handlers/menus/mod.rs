// handlers/menus/mod.rs - Menu CRUD handlers
//
// Collection routes are scoped to the caller's business via X-Business-ID;
// item routes take the menu id from the first path segment after /menus/.

pub mod create; // POST   /menus
pub mod delete; // DELETE /menus/:id
pub mod get; //    GET    /menus/:id
pub mod list; //   GET    /menus
pub mod update; // PUT    /menus/:id

pub use create::create as menu_create;
pub use delete::delete as menu_delete;
pub use get::get as menu_get;
pub use list::list as menu_list;
pub use update::update as menu_update;
