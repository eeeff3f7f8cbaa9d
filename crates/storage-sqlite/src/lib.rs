//! SQLite storage implementation for Work Schedule.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `workschedule-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, categories and events
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod categories;
pub mod events;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use categories::CategoryRepository;
pub use events::EventRepository;
pub use users::UserRepository;

// Re-export from workschedule-core for convenience
pub use workschedule_core::errors::{DatabaseError, Error, Result};
