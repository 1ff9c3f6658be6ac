pub mod menu;

pub use menu::{CreateMenuRequest, Menu, MenuDocument, UpdateMenuRequest};
