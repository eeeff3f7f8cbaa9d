//! SQLite storage implementation for the shared category registry.

mod model;
mod repository;

pub use model::CategoryDB;
pub use repository::CategoryRepository;
