use chrono::{Datelike, Days, Local, NaiveDate};

/// Today's date in the server's naive local time.
///
/// Grid builders take "today" as a parameter; this is what callers pass in
/// production.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday on or before `date`, or `None` when that falls before chrono's range.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// The seven dates of the Monday-based week containing `date`.
pub fn week_dates(date: NaiveDate) -> Option<Vec<NaiveDate>> {
    let start = week_start(date)?;
    let end = start.checked_add_days(Days::new(6))?;
    Some(get_days_between(start, end))
}

/// Formats minutes after midnight as `HH:MM`.
pub fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Every date from `start` to `end`, both inclusive.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}
