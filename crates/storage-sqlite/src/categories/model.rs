//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use workschedule_core::categories::Category;

/// Database model for categories.
///
/// Also loadable by name so the raw upsert statement can return it.
#[derive(Queryable, QueryableByName, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub owner_user_id: Option<String>,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            owner_user_id: db.owner_user_id,
            name: db.name,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
