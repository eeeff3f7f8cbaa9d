use chrono::NaiveDate;

use super::calendar_model::{HourRange, MonthGrid, WeekGrid, YearMonth};
use crate::access::Caller;
use crate::errors::Result;

/// Trait defining the contract for the caller's calendar views.
///
/// `today` is passed in so the grids are deterministic.
pub trait CalendarServiceTrait: Send + Sync {
    fn month_view(&self, caller: &Caller, month: YearMonth, today: NaiveDate) -> Result<MonthGrid>;

    fn week_view(
        &self,
        caller: &Caller,
        date: NaiveDate,
        hours: HourRange,
        today: NaiveDate,
    ) -> Result<WeekGrid>;
}
