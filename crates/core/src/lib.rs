//! Work Schedule Core - Domain entities, services, and traits.
//!
//! This crate contains the scheduling rules: event validation, the shared
//! category registry, the access policy and the grid projector that places
//! events into week and month views. It is database-agnostic and defines
//! traits that are implemented by the `storage-sqlite` crate.

pub mod access;
pub mod calendar;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod events;
pub mod users;
pub mod utils;

// Re-export the caller identity used by every service
pub use access::{Caller, Identity};

// Re-export error types
pub use errors::Error;
pub use errors::ErrorKind;
pub use errors::Result;
