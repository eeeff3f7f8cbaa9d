//! Category registry service.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::{Category, CategoryRepositoryTrait, CategoryServiceTrait, NewCategory};
use crate::access::{authorize, Action, Caller};
use crate::errors::{Error, Result};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn upsert_global_category(
        &self,
        caller: &Caller,
        category: NewCategory,
    ) -> Result<Category> {
        let identity = authorize(caller, Action::ManageCategories)?;
        let category = category.validate()?;

        let saved = self.repository.upsert_global(category).await?;
        info!(
            "Admin {} saved global category '{}' ({}) with color {}",
            identity.user_id, saved.name, saved.id, saved.color
        );
        Ok(saved)
    }

    async fn delete_global_category(&self, caller: &Caller, category_id: &str) -> Result<()> {
        let identity = authorize(caller, Action::ManageCategories)?;

        let deleted = self.repository.delete_global(category_id).await?;
        if deleted == 0 {
            return Err(Error::MissingOrForbidden);
        }
        info!(
            "Admin {} deleted global category {}",
            identity.user_id, category_id
        );
        Ok(())
    }

    fn list_global_categories(&self, caller: &Caller) -> Result<Vec<Category>> {
        authorize(caller, Action::ReadCategories)?;
        let categories = self.repository.list_global()?;
        debug!("Listed {} global categories", categories.len());
        Ok(categories)
    }

    fn get_category(&self, caller: &Caller, category_id: &str) -> Result<Category> {
        authorize(caller, Action::ReadCategories)?;
        self.repository
            .get_by_id(category_id)?
            .filter(Category::is_global)
            .ok_or(Error::MissingOrForbidden)
    }
}
