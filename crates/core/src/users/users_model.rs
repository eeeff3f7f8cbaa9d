//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, RESERVED_ADMIN_USERNAME};
use crate::errors::ValidationError;

/// Domain model representing a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for persisting a new user.
///
/// Only the out-of-band admin provisioning path sets `is_admin`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Raw registration form values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
}

impl Registration {
    /// Validates the form and returns the trimmed username.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let username = self.username.trim();
        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(ValidationError::UsernameTooShort);
        }
        if username.eq_ignore_ascii_case(RESERVED_ADMIN_USERNAME) {
            return Err(ValidationError::ReservedUsername);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(username.to_string())
    }
}
