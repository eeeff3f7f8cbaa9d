use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::events_model::{Event, EventDraft, EventInput};
use super::events_traits::{EventRepositoryTrait, EventServiceTrait};
use crate::access::{authorize, Action, Caller};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// Service for managing a user's own calendar events
pub struct EventService {
    repository: Arc<dyn EventRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl EventService {
    pub fn new(
        repository: Arc<dyn EventRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    /// Runs field validation, then checks the category reference.
    fn validate(&self, input: &EventInput) -> Result<EventDraft> {
        let draft = input.validate()?;
        if let Some(category_id) = draft.category_id.as_deref() {
            let known = self
                .category_repository
                .get_by_id(category_id)?
                .is_some_and(|c: Category| c.is_global());
            if !known {
                return Err(ValidationError::UnknownCategory.into());
            }
        }
        Ok(draft)
    }
}

/// A category deleted between validation and the write trips the foreign key;
/// report it the same way as a category that never existed.
fn map_category_violation(has_category: bool) -> impl FnOnce(Error) -> Error {
    move |e| match e {
        Error::Database(DatabaseError::ForeignKeyViolation(_)) if has_category => {
            Error::Validation(ValidationError::UnknownCategory)
        }
        other => other,
    }
}

#[async_trait]
impl EventServiceTrait for EventService {
    async fn create_event(&self, caller: &Caller, input: EventInput) -> Result<Event> {
        let identity = authorize(caller, Action::ManageOwnEvents)?;
        let draft = self.validate(&input)?;
        let has_category = draft.category_id.is_some();

        let event = self
            .repository
            .create(&identity.user_id, draft)
            .await
            .map_err(map_category_violation(has_category))?;
        debug!(
            "Created event {} on {} for user {}",
            event.id, event.event_date, identity.user_id
        );
        Ok(event)
    }

    async fn update_event(
        &self,
        caller: &Caller,
        event_id: &str,
        input: EventInput,
    ) -> Result<Event> {
        let identity = authorize(caller, Action::ManageOwnEvents)?;
        let draft = self.validate(&input)?;
        let has_category = draft.category_id.is_some();

        self.repository
            .update_owned(&identity.user_id, event_id, draft)
            .await
            .map_err(map_category_violation(has_category))?
            .ok_or(Error::MissingOrForbidden)
    }

    async fn delete_event(&self, caller: &Caller, event_id: &str) -> Result<()> {
        let identity = authorize(caller, Action::ManageOwnEvents)?;

        let deleted = self
            .repository
            .delete_owned(&identity.user_id, event_id)
            .await?;
        if deleted == 0 {
            return Err(Error::MissingOrForbidden);
        }
        debug!("Deleted event {} of user {}", event_id, identity.user_id);
        Ok(())
    }

    fn get_event(&self, caller: &Caller, event_id: &str) -> Result<Event> {
        let identity = authorize(caller, Action::ManageOwnEvents)?;
        self.repository
            .get_owned(&identity.user_id, event_id)?
            .ok_or(Error::MissingOrForbidden)
    }

    fn list_events_in_range(
        &self,
        caller: &Caller,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Event>> {
        let identity = authorize(caller, Action::ManageOwnEvents)?;
        if from > to {
            return Ok(Vec::new());
        }
        self.repository.list_in_range(&identity.user_id, from, to)
    }
}
