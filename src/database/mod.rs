pub mod manager;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::InMemoryMenuRepository;
pub use mongo::MongoMenuRepository;
pub use repository::{MenuPatch, MenuRepository, MenuResult};
