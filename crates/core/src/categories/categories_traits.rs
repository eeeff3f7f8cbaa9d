//! Traits for the category repository and service.

use async_trait::async_trait;

use super::categories_model::{Category, NewCategory};
use crate::access::Caller;
use crate::Result;

/// Repository trait for category persistence operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Inserts a global category, or updates the color of the existing global
    /// category whose name matches case-insensitively.
    ///
    /// Implementations must perform this as a single atomic store operation
    /// backed by a unique constraint, not as a read followed by a write.
    async fn upsert_global(&self, category: NewCategory) -> Result<Category>;

    /// Deletes a global category. Events referencing it keep existing with a
    /// null category. Returns the number of deleted rows.
    async fn delete_global(&self, category_id: &str) -> Result<usize>;

    /// Global categories ordered by `(name, id)`.
    fn list_global(&self) -> Result<Vec<Category>>;

    fn get_by_id(&self, category_id: &str) -> Result<Option<Category>>;
}

/// Service trait for the category registry.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn upsert_global_category(
        &self,
        caller: &Caller,
        category: NewCategory,
    ) -> Result<Category>;

    async fn delete_global_category(&self, caller: &Caller, category_id: &str) -> Result<()>;

    fn list_global_categories(&self, caller: &Caller) -> Result<Vec<Category>>;

    /// Looks up a category for the caller; unknown ids are `MissingOrForbidden`.
    fn get_category(&self, caller: &Caller, category_id: &str) -> Result<Category>;
}
