//! Calendar module - month and week grid projection of a user's events.

mod calendar_model;
mod calendar_projector;
mod calendar_service;
mod calendar_traits;

// Re-export the public interface
pub use calendar_model::{
    HourRange, HourRow, MonthCell, MonthGrid, WeekDay, WeekGrid, YearMonth,
};
pub use calendar_projector::{bucket_by_date, build_month_grid, build_week_grid};
pub use calendar_service::CalendarService;
pub use calendar_traits::CalendarServiceTrait;
