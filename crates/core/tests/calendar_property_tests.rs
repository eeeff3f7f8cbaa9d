//! Property-based tests for event validation and grid placement.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use workschedule_core::calendar::{build_month_grid, build_week_grid, HourRange, YearMonth};
use workschedule_core::errors::ValidationError;
use workschedule_core::events::{Event, EventDraft, EventInput};
use workschedule_core::utils::{format_minutes, parse_strict_date};

// =============================================================================
// Generators
// =============================================================================

fn arb_year_month() -> impl Strategy<Value = YearMonth> {
    (1i32..=9999, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=366).prop_map(|(y, ordinal)| {
        NaiveDate::from_yo_opt(y, ordinal)
            .unwrap_or_else(|| NaiveDate::from_yo_opt(y, 365).unwrap())
    })
}

fn arb_minute() -> impl Strategy<Value = i32> {
    0i32..1440
}

fn event_at(date: NaiveDate, start_minute: i32, end_minute: i32) -> Event {
    Event {
        id: format!("{}-{}", date, start_minute),
        owner_user_id: "u1".to_string(),
        title: "Shift".to_string(),
        description: String::new(),
        event_date: date,
        category_id: None,
        start_minute,
        end_minute,
        color: "#4f46e5".to_string(),
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any in-day range with end after start validates; anything else does not.
    #[test]
    fn prop_range_validity(start in arb_minute(), end in arb_minute()) {
        let input = EventInput {
            title: "Shift".to_string(),
            date: "2025-03-10".to_string(),
            start_time: format_minutes(start),
            end_time: format_minutes(end),
            ..EventInput::default()
        };
        let result = input.validate();
        if end > start {
            let draft = result.unwrap();
            prop_assert_eq!(draft.start_minute, start);
            prop_assert_eq!(draft.end_minute, end);
        } else {
            prop_assert_eq!(result.unwrap_err(), ValidationError::InvalidRange);
        }
        prop_assert_eq!(EventDraft::check_range(start, end).is_ok(), end > start);
    }

    /// Formatting a date and parsing it back yields the same date.
    #[test]
    fn prop_date_round_trip(date in arb_date()) {
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_strict_date(&text), Some(date));
    }

    /// The month grid always holds 42 consecutive days starting on a Monday.
    #[test]
    fn prop_month_grid_has_42_consecutive_cells(month in arb_year_month(), today in arb_date()) {
        let grid = build_month_grid(month, today, &[]);
        prop_assert_eq!(grid.cells.len(), 42);
        prop_assert_eq!(grid.cells[0].date.weekday(), chrono::Weekday::Mon);
        for pair in grid.cells.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
        prop_assert!(grid.cells[..7].iter().any(|c| c.in_month));
        prop_assert_eq!(grid.cells.iter().filter(|c| c.date == month.first_day()).count(), 1);
        let (first, last) = grid.span();
        prop_assert_eq!((first, last), month.grid_span());
    }

    /// Navigation stays within 1..=12 and next/previous undo each other away from the bounds.
    #[test]
    fn prop_month_navigation(month in arb_year_month()) {
        let next = month.next();
        let previous = month.previous();
        prop_assert!((1..=12).contains(&next.month()));
        prop_assert!((1..=12).contains(&previous.month()));
        if next != month {
            prop_assert_eq!(next.previous(), month);
        }
        if previous != month {
            prop_assert_eq!(previous.next(), month);
        }
    }

    /// An event lands in exactly the hour rows its interval intersects.
    #[test]
    fn prop_week_rows_match_overlap(start in 0i32..1439, length in 1i32..600) {
        let end = (start + length).min(1439);
        prop_assume!(end > start);
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let full_day = HourRange::new(0, 24).unwrap();
        let grid = build_week_grid(monday, full_day, monday, &[event_at(monday, start, end)]).unwrap();

        for row in &grid.rows {
            let slot_start = row.hour as i32 * 60;
            let expected = start < slot_start + 60 && end > slot_start;
            prop_assert_eq!(row.cells[0].len() == 1, expected, "hour {}", row.hour);
        }
    }
}
