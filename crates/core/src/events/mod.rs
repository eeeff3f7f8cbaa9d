//! Events module - calendar event models, validation, services, and traits.

mod events_model;
mod events_service;
mod events_traits;


// Re-export the public interface
pub use events_model::{Event, EventDraft, EventInput};
pub use events_service::EventService;
pub use events_traits::{EventRepositoryTrait, EventServiceTrait};
