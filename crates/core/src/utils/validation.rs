//! Field-level parsers shared by events and categories.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::DATE_FORMAT;

/// `#` followed by exactly six hex digits, either case
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid regex pattern"));

/// One or two digit hour, colon, two digit minute
static TIME_OF_DAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("Invalid regex pattern"));

/// Four digit year, two digit month and day, ASCII only
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex pattern"));

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Parses `HH:MM` (hour 0-23, minute 0-59) into minutes after midnight.
pub fn parse_time_of_day(value: &str) -> Option<i32> {
    let caps = TIME_OF_DAY_REGEX.captures(value)?;
    let hour: i32 = caps[1].parse().ok()?;
    let minute: i32 = caps[2].parse().ok()?;
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Parses a `YYYY-MM-DD` date, rejecting anything that does not format back
/// to the exact same string.
///
/// Signed or wider years are rejected before chrono sees them, so stored dates
/// always sort as text.
pub fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    if !DATE_REGEX.is_match(value) {
        return None;
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    if date.format(DATE_FORMAT).to_string() != value {
        return None;
    }
    Some(date)
}
