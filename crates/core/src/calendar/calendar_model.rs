//! Grid view models for the month and week calendars.

use chrono::{Datelike, Days, Duration, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_WEEK_END_HOUR, DEFAULT_WEEK_START_HOUR, MONTH_GRID_CELLS};
use crate::errors::ValidationError;
use crate::events::Event;
use crate::utils::week_start;

static YEAR_MONTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("Invalid regex pattern"));

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar month, always with a four-digit year and a month in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth);
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` query value.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let caps = YEAR_MONTH_REGEX
            .captures(value.trim())
            .ok_or(ValidationError::InvalidMonth)?;
        let year = caps[1].parse().map_err(|_| ValidationError::InvalidMonth)?;
        let month = caps[2].parse().map_err(|_| ValidationError::InvalidMonth)?;
        Self::new(year, month)
    }

    /// The month containing `date`. Years outside 1..=9999 are clamped.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year().clamp(MIN_YEAR, MAX_YEAR);
        let month = if year == date.year() {
            date.month()
        } else if year == MIN_YEAR {
            1
        } else {
            12
        };
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one. January of year 1 stays put.
    pub fn previous(&self) -> Self {
        match (self.year, self.month) {
            (MIN_YEAR, 1) => *self,
            (year, 1) => Self {
                year: year - 1,
                month: 12,
            },
            (year, month) => Self {
                year,
                month: month - 1,
            },
        }
    }

    /// The month after this one. December of year 9999 stays put.
    pub fn next(&self) -> Self {
        match (self.year, self.month) {
            (MAX_YEAR, 12) => *self,
            (year, 12) => Self {
                year: year + 1,
                month: 1,
            },
            (year, month) => Self {
                year,
                month: month + 1,
            },
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // year and month are range checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Monday on or before the first day of the month.
    pub fn grid_start(&self) -> NaiveDate {
        let first = self.first_day();
        week_start(first).unwrap_or(first)
    }

    /// First and last date covered by the 42-cell grid, inclusive.
    pub fn grid_span(&self) -> (NaiveDate, NaiveDate) {
        let start = self.grid_start();
        (start, start + Duration::days(MONTH_GRID_CELLS as i64 - 1))
    }
}

#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = ValidationError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Hour rows rendered by the week grid, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHourRange")]
pub struct HourRange {
    start_hour: u32,
    end_hour: u32,
}

impl HourRange {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, ValidationError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(ValidationError::InvalidHourRange);
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start_hour..self.end_hour
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHourRange {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<RawHourRange> for HourRange {
    type Error = ValidationError;

    fn try_from(raw: RawHourRange) -> Result<Self, Self::Error> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WEEK_START_HOUR,
            end_hour: DEFAULT_WEEK_END_HOUR,
        }
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    /// Ordered by `(start_minute, id)`
    pub events: Vec<Event>,
}

/// Six full weeks starting on the Monday on or before the 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<MonthCell>,
}

impl MonthGrid {
    /// Rows of seven cells, Monday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(7)
    }

    /// First and last date shown, inclusive.
    pub fn span(&self) -> (NaiveDate, NaiveDate) {
        match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => self.month.grid_span(),
        }
    }
}

/// Column header of the week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub date: NaiveDate,
    /// `Mon` .. `Sun`
    pub label: String,
    pub is_today: bool,
}

/// One hour row of the week grid. `cells[i]` belongs to `days[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourRow {
    pub hour: u32,
    /// `HH:00`
    pub label: String,
    pub cells: Vec<Vec<Event>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub week_start: NaiveDate,
    pub days: Vec<WeekDay>,
    pub rows: Vec<HourRow>,
}

impl WeekGrid {
    pub fn week_end(&self) -> NaiveDate {
        self.days.last().map_or(self.week_start, |day| day.date)
    }

    /// `None` when the previous week falls outside chrono's date range.
    pub fn previous_week_start(&self) -> Option<NaiveDate> {
        self.week_start.checked_sub_days(Days::new(7))
    }

    /// `None` when the next week falls outside chrono's date range.
    pub fn next_week_start(&self) -> Option<NaiveDate> {
        self.week_start.checked_add_days(Days::new(7))
    }
}
