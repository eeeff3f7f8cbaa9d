//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use workschedule_core::users::{NewUser, User};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            password_hash: db.password_hash,
            is_admin: db.is_admin,
            created_at: db.created_at,
        }
    }
}

impl NewUserDB {
    pub fn new(id: String, domain: NewUser, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            username: domain.username,
            password_hash: domain.password_hash,
            is_admin: domain.is_admin,
            created_at,
        }
    }
}
