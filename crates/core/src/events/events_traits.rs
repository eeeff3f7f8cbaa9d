//! Event repository and service traits.
//!
//! Every repository operation is scoped by the owning user id. A row that
//! exists but belongs to someone else is indistinguishable from a missing row.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::events_model::{Event, EventDraft, EventInput};
use crate::access::Caller;
use crate::errors::Result;

/// Trait defining the contract for event persistence.
#[async_trait]
pub trait EventRepositoryTrait: Send + Sync {
    /// Inserts a new event for `owner_user_id`.
    async fn create(&self, owner_user_id: &str, draft: EventDraft) -> Result<Event>;

    /// Updates the event only if it exists and is owned by `owner_user_id`.
    ///
    /// Returns `None` when no row matched.
    async fn update_owned(
        &self,
        owner_user_id: &str,
        event_id: &str,
        draft: EventDraft,
    ) -> Result<Option<Event>>;

    /// Deletes the event only if owned. Returns the number of deleted rows.
    async fn delete_owned(&self, owner_user_id: &str, event_id: &str) -> Result<usize>;

    fn get_owned(&self, owner_user_id: &str, event_id: &str) -> Result<Option<Event>>;

    /// Events with `event_date` in `[from, to]`, ordered by
    /// `(event_date, start_minute, id)`.
    fn list_in_range(&self, owner_user_id: &str, from: NaiveDate, to: NaiveDate)
        -> Result<Vec<Event>>;
}

/// Trait defining the contract for event service operations.
#[async_trait]
pub trait EventServiceTrait: Send + Sync {
    async fn create_event(&self, caller: &Caller, input: EventInput) -> Result<Event>;

    async fn update_event(&self, caller: &Caller, event_id: &str, input: EventInput)
        -> Result<Event>;

    async fn delete_event(&self, caller: &Caller, event_id: &str) -> Result<()>;

    fn get_event(&self, caller: &Caller, event_id: &str) -> Result<Event>;

    fn list_events_in_range(
        &self,
        caller: &Caller,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Event>>;
}
