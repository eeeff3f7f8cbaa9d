//! Core error types for the Work Schedule application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the scheduling core.
///
/// Validation failures carry a single user-facing message. Lookups that miss
/// and lookups that hit another user's record both surface as
/// [`Error::MissingOrForbidden`] so callers cannot detect foreign records.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Not found.")]
    MissingOrForbidden,

    #[error("You are not allowed to do that.")]
    Unauthorized,

    #[error("Not logged in.")]
    Unauthenticated,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
///
/// The display text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required.")]
    MissingTitle,

    #[error("Date must be YYYY-MM-DD.")]
    InvalidDate,

    #[error("Time must be HH:MM.")]
    InvalidTime,

    #[error("End time must be after start time.")]
    InvalidRange,

    #[error("Color must be like #ff0000.")]
    InvalidColor,

    #[error("Category name is required.")]
    MissingName,

    #[error("Category does not exist.")]
    UnknownCategory,

    #[error("Month must be YYYY-MM with a month between 1 and 12.")]
    InvalidMonth,

    #[error("Hour range must satisfy 0 <= start < end <= 24.")]
    InvalidHourRange,

    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,

    #[error("That username is reserved.")]
    ReservedUsername,

    #[error("Password must be at least 4 characters.")]
    PasswordTooShort,

    #[error("That username is already taken.")]
    UsernameTaken,

    #[error("Username and password are required.")]
    MissingCredentials,
}

/// Flat classification of every failure the core can report.
///
/// Boundary layers (routing, rendering) match on this instead of the nested
/// error enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingTitle,
    InvalidDate,
    InvalidTime,
    InvalidRange,
    InvalidColor,
    MissingName,
    UnknownCategory,
    InvalidMonth,
    InvalidHourRange,
    UsernameTooShort,
    ReservedUsername,
    PasswordTooShort,
    UsernameTaken,
    MissingCredentials,
    InvalidCredentials,
    MissingOrForbidden,
    Unauthorized,
    Unauthenticated,
    StoreUnavailable,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingTitle => ErrorKind::MissingTitle,
            ValidationError::InvalidDate => ErrorKind::InvalidDate,
            ValidationError::InvalidTime => ErrorKind::InvalidTime,
            ValidationError::InvalidRange => ErrorKind::InvalidRange,
            ValidationError::InvalidColor => ErrorKind::InvalidColor,
            ValidationError::MissingName => ErrorKind::MissingName,
            ValidationError::UnknownCategory => ErrorKind::UnknownCategory,
            ValidationError::InvalidMonth => ErrorKind::InvalidMonth,
            ValidationError::InvalidHourRange => ErrorKind::InvalidHourRange,
            ValidationError::UsernameTooShort => ErrorKind::UsernameTooShort,
            ValidationError::ReservedUsername => ErrorKind::ReservedUsername,
            ValidationError::PasswordTooShort => ErrorKind::PasswordTooShort,
            ValidationError::UsernameTaken => ErrorKind::UsernameTaken,
            ValidationError::MissingCredentials => ErrorKind::MissingCredentials,
        }
    }
}

impl Error {
    /// Returns the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(e) => e.kind(),
            Error::MissingOrForbidden => ErrorKind::MissingOrForbidden,
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::Unauthenticated => ErrorKind::Unauthenticated,
            Error::InvalidCredentials => ErrorKind::InvalidCredentials,
            Error::Database(_) | Error::Unexpected(_) => ErrorKind::StoreUnavailable,
        }
    }

    /// Message suitable for showing to the end user.
    ///
    /// Store failures are reported generically; their details only go to the log.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::StoreUnavailable => {
                "Something went wrong. Please try again later.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
