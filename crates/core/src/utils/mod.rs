//! Shared parsing and date helpers.

pub mod time_utils;
pub mod validation;

pub use time_utils::{format_minutes, get_days_between, local_today, week_dates, week_start};
pub use validation::{is_hex_color, parse_strict_date, parse_time_of_day};
