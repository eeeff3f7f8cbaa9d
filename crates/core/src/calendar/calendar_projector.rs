//! Pure placement of events into calendar grids. No I/O.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use super::calendar_model::{
    HourRange, HourRow, MonthCell, MonthGrid, WeekDay, WeekGrid, YearMonth,
};
use crate::errors::ValidationError;
use crate::events::Event;
use crate::utils::{get_days_between, week_dates};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Groups events by their date. Each day is ordered by `(start_minute, id)`.
pub fn bucket_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        buckets
            .entry(event.event_date)
            .or_default()
            .push(event.clone());
    }
    for day in buckets.values_mut() {
        day.sort_by(|a, b| (a.start_minute, &a.id).cmp(&(b.start_minute, &b.id)));
    }
    buckets
}

/// Builds the 42-cell grid for `month`.
///
/// Events outside the grid span are ignored.
pub fn build_month_grid(month: YearMonth, today: NaiveDate, events: &[Event]) -> MonthGrid {
    let mut buckets = bucket_by_date(events);
    let (first, last) = month.grid_span();
    let cells = get_days_between(first, last)
        .into_iter()
        .map(|date| MonthCell {
            date,
            in_month: month.contains(date),
            is_today: date == today,
            events: buckets.remove(&date).unwrap_or_default(),
        })
        .collect();

    MonthGrid { month, cells }
}

/// Builds the week grid for the Monday-based week containing `date`.
///
/// An event lands in every hour row its `[start_minute, end_minute)` interval
/// intersects. Fails with `InvalidDate` when the week runs past chrono's range.
pub fn build_week_grid(
    date: NaiveDate,
    hours: HourRange,
    today: NaiveDate,
    events: &[Event],
) -> Result<WeekGrid, ValidationError> {
    let dates = week_dates(date).ok_or(ValidationError::InvalidDate)?;
    let week_start = dates[0];
    let buckets = bucket_by_date(events);

    let days = dates
        .iter()
        .map(|&date| WeekDay {
            date,
            label: DAY_LABELS[date.weekday().num_days_from_monday() as usize].to_string(),
            is_today: date == today,
        })
        .collect();

    let rows = hours
        .hours()
        .map(|hour| {
            let slot_start = (hour * 60) as i32;
            let slot_end = slot_start + 60;
            let cells = dates
                .iter()
                .map(|date| {
                    buckets
                        .get(date)
                        .map(|day| {
                            day.iter()
                                .filter(|e| e.overlaps(slot_start, slot_end))
                                .cloned()
                                .collect()
                        })
                        .unwrap_or_default()
                })
                .collect();
            HourRow {
                hour,
                label: format!("{:02}:00", hour),
                cells,
            }
        })
        .collect();

    Ok(WeekGrid {
        week_start,
        days,
        rows,
    })
}
