use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::calendar_model::{HourRange, MonthGrid, WeekGrid, YearMonth};
use super::calendar_projector::{build_month_grid, build_week_grid};
use super::calendar_traits::CalendarServiceTrait;
use crate::access::Caller;
use crate::errors::{Result, ValidationError};
use crate::events::EventServiceTrait;
use crate::utils::week_dates;

/// Projects the caller's own events into month and week grids.
pub struct CalendarService {
    event_service: Arc<dyn EventServiceTrait>,
}

impl CalendarService {
    pub fn new(event_service: Arc<dyn EventServiceTrait>) -> Self {
        Self { event_service }
    }
}

impl CalendarServiceTrait for CalendarService {
    fn month_view(&self, caller: &Caller, month: YearMonth, today: NaiveDate) -> Result<MonthGrid> {
        let (from, to) = month.grid_span();
        let events = self.event_service.list_events_in_range(caller, from, to)?;
        debug!("Month view {} with {} events", month, events.len());
        Ok(build_month_grid(month, today, &events))
    }

    fn week_view(
        &self,
        caller: &Caller,
        date: NaiveDate,
        hours: HourRange,
        today: NaiveDate,
    ) -> Result<WeekGrid> {
        let dates = week_dates(date).ok_or(ValidationError::InvalidDate)?;
        let (from, to) = (dates[0], dates[6]);
        let events = self.event_service.list_events_in_range(caller, from, to)?;
        debug!("Week view {} with {} events", from, events.len());
        Ok(build_week_grid(date, hours, today, &events)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventInput};
    use crate::ErrorKind;
    use crate::{Error, Identity};
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use std::sync::Mutex;

    /// Serves a fixed list of events and records the requested ranges.
    struct FixedEvents {
        events: Vec<Event>,
        requested: Mutex<Vec<(NaiveDate, NaiveDate)>>,
    }

    #[async_trait]
    impl EventServiceTrait for FixedEvents {
        async fn create_event(&self, _caller: &Caller, _input: EventInput) -> Result<Event> {
            unimplemented!()
        }

        async fn update_event(
            &self,
            _caller: &Caller,
            _event_id: &str,
            _input: EventInput,
        ) -> Result<Event> {
            unimplemented!()
        }

        async fn delete_event(&self, _caller: &Caller, _event_id: &str) -> Result<()> {
            unimplemented!()
        }

        fn get_event(&self, _caller: &Caller, _event_id: &str) -> Result<Event> {
            unimplemented!()
        }

        fn list_events_in_range(
            &self,
            caller: &Caller,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<Vec<Event>> {
            let Some(Identity { user_id, .. }) = caller.identity() else {
                return Err(Error::Unauthenticated);
            };
            self.requested.lock().unwrap().push((from, to));
            Ok(self
                .events
                .iter()
                .filter(|e| &e.owner_user_id == user_id && e.event_date >= from && e.event_date <= to)
                .cloned()
                .collect())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn gym() -> Event {
        Event {
            id: "evt-1".to_string(),
            owner_user_id: "alice".to_string(),
            title: "Gym".to_string(),
            description: String::new(),
            event_date: date(2025, 3, 10),
            category_id: None,
            start_minute: 420,
            end_minute: 480,
            color: "#4f46e5".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn setup() -> (Arc<FixedEvents>, CalendarService) {
        let events = Arc::new(FixedEvents {
            events: vec![gym()],
            requested: Mutex::new(Vec::new()),
        });
        let service = CalendarService::new(events.clone());
        (events, service)
    }

    #[test]
    fn test_month_view_queries_grid_span() {
        let (events, service) = setup();
        let march = YearMonth::new(2025, 3).unwrap();
        let grid = service
            .month_view(&Caller::user("alice", false), march, date(2025, 3, 10))
            .unwrap();

        assert_eq!(
            events.requested.lock().unwrap().as_slice(),
            &[(date(2025, 2, 24), date(2025, 4, 6))]
        );
        let cell = grid.cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(cell.events, vec![gym()]);
    }

    #[test]
    fn test_week_view_places_event() {
        let (events, service) = setup();
        let grid = service
            .week_view(
                &Caller::user("alice", false),
                date(2025, 3, 13),
                HourRange::default(),
                date(2025, 3, 13),
            )
            .unwrap();

        assert_eq!(
            events.requested.lock().unwrap().as_slice(),
            &[(date(2025, 3, 10), date(2025, 3, 16))]
        );
        let seven = grid.rows.iter().find(|r| r.hour == 7).unwrap();
        assert_eq!(seven.cells[0], vec![gym()]);
    }

    #[test]
    fn test_views_only_show_callers_events() {
        let (_, service) = setup();
        let march = YearMonth::new(2025, 3).unwrap();
        let grid = service
            .month_view(&Caller::user("bob", false), march, date(2025, 3, 10))
            .unwrap();
        assert!(grid.cells.iter().all(|c| c.events.is_empty()));
    }

    #[test]
    fn test_week_view_past_date_limits_is_invalid() {
        let (events, service) = setup();
        let err = service
            .week_view(
                &Caller::user("alice", false),
                NaiveDate::MAX,
                HourRange::default(),
                date(2025, 3, 13),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(events.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn test_anonymous_is_rejected() {
        let (_, service) = setup();
        let march = YearMonth::new(2025, 3).unwrap();
        let err = service
            .month_view(&Caller::Anonymous, march, date(2025, 3, 10))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }
}
