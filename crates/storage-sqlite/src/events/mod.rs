//! SQLite storage implementation for calendar events.

mod model;
mod repository;

pub use model::{EventChangesDB, EventDB, NewEventDB};
pub use repository::EventRepository;
