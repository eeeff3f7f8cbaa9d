//! Categories module - the global category registry.
//!
//! Categories are shared color tags. Only admins mutate them; every
//! authenticated user can read them and attach them to events.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::{Category, NewCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
