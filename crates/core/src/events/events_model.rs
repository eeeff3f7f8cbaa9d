//! Calendar event domain models and input validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EVENT_COLOR, MINUTES_PER_DAY};
use crate::errors::ValidationError;
use crate::utils::{format_minutes, is_hex_color, parse_strict_date, parse_time_of_day};

/// A stored calendar event. Always owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub category_id: Option<String>,
    /// Minutes after midnight, inclusive
    pub start_minute: i32,
    /// Minutes after midnight, exclusive; always greater than `start_minute`
    pub end_minute: i32,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Event {
    /// Half-open overlap test against `[slot_start, slot_end)`.
    pub fn overlaps(&self, slot_start: i32, slot_end: i32) -> bool {
        self.start_minute < slot_end && self.end_minute > slot_start
    }

    pub fn start_time(&self) -> String {
        format_minutes(self.start_minute)
    }

    pub fn end_time(&self) -> String {
        format_minutes(self.end_minute)
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end_minute - self.start_minute
    }
}

/// Raw event form values, exactly as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub color: String,
    /// Empty or missing means no category
    pub category_id: Option<String>,
}

impl Default for EventInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            color: DEFAULT_EVENT_COLOR.to_string(),
            category_id: None,
        }
    }
}

/// Validated, normalized event fields ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub category_id: Option<String>,
    pub start_minute: i32,
    pub end_minute: i32,
    pub color: String,
}

impl EventInput {
    /// Validates the form.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// title, date, times, range, color.
    pub fn validate(&self) -> Result<EventDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let event_date = parse_strict_date(&self.date).ok_or(ValidationError::InvalidDate)?;

        let (Some(start_minute), Some(end_minute)) = (
            parse_time_of_day(&self.start_time),
            parse_time_of_day(&self.end_time),
        ) else {
            return Err(ValidationError::InvalidTime);
        };

        EventDraft::check_range(start_minute, end_minute)?;

        let color = self.color.trim();
        if !is_hex_color(color) {
            return Err(ValidationError::InvalidColor);
        }

        let category_id = self
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(EventDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            event_date,
            category_id,
            start_minute,
            end_minute,
            color: color.to_string(),
        })
    }
}

impl EventDraft {
    /// Both bounds inside the day and `end > start`.
    pub fn check_range(start_minute: i32, end_minute: i32) -> Result<(), ValidationError> {
        let in_day = |m: i32| (0..MINUTES_PER_DAY).contains(&m);
        if !in_day(start_minute) || !in_day(end_minute) {
            return Err(ValidationError::InvalidTime);
        }
        if end_minute <= start_minute {
            return Err(ValidationError::InvalidRange);
        }
        Ok(())
    }
}
