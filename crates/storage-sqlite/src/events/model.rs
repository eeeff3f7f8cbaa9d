//! Database models for events.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use workschedule_core::events::{Event, EventDraft};

use crate::users::UserDB;

/// Database model for events
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = owner_user_id))]
#[diesel(table_name = crate::schema::events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventDB {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub category_id: Option<String>,
    pub start_minute: i32,
    pub end_minute: i32,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new event
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::events)]
pub struct NewEventDB {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub category_id: Option<String>,
    pub start_minute: i32,
    pub end_minute: i32,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of the editable columns.
///
/// `category_id: None` clears the reference.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::events)]
#[diesel(treat_none_as_null = true)]
pub struct EventChangesDB {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub category_id: Option<String>,
    pub start_minute: i32,
    pub end_minute: i32,
    pub color: String,
    pub updated_at: NaiveDateTime,
}

impl From<EventDB> for Event {
    fn from(db: EventDB) -> Self {
        Self {
            id: db.id,
            owner_user_id: db.owner_user_id,
            title: db.title,
            description: db.description,
            event_date: db.event_date,
            category_id: db.category_id,
            start_minute: db.start_minute,
            end_minute: db.end_minute,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewEventDB {
    pub fn new(id: String, owner_user_id: String, draft: EventDraft, now: NaiveDateTime) -> Self {
        Self {
            id,
            owner_user_id,
            title: draft.title,
            description: draft.description,
            event_date: draft.event_date,
            category_id: draft.category_id,
            start_minute: draft.start_minute,
            end_minute: draft.end_minute,
            color: draft.color,
            created_at: now,
            updated_at: now,
        }
    }
}

impl EventChangesDB {
    pub fn new(draft: EventDraft, now: NaiveDateTime) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            event_date: draft.event_date,
            category_id: draft.category_id,
            start_minute: draft.start_minute,
            end_minute: draft.end_minute,
            color: draft.color,
            updated_at: now,
        }
    }
}
