use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use workschedule_core::events::{Event, EventDraft, EventRepositoryTrait};
use workschedule_core::Result;

use super::model::{EventChangesDB, EventDB, NewEventDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::events;

/// Event storage. Every statement filters on the owner.
pub struct EventRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl EventRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EventRepository { pool, writer }
    }
}

#[async_trait]
impl EventRepositoryTrait for EventRepository {
    async fn create(&self, owner_user_id: &str, draft: EventDraft) -> Result<Event> {
        let owner_user_id = owner_user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Event> {
                let new_event_db = NewEventDB::new(
                    Uuid::now_v7().to_string(),
                    owner_user_id,
                    draft,
                    Utc::now().naive_utc(),
                );

                let result_db = diesel::insert_into(events::table)
                    .values(&new_event_db)
                    .returning(EventDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Event::from(result_db))
            })
            .await
    }

    async fn update_owned(
        &self,
        owner_user_id: &str,
        event_id: &str,
        draft: EventDraft,
    ) -> Result<Option<Event>> {
        let owner_user_id = owner_user_id.to_string();
        let event_id = event_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Event>> {
                let changes = EventChangesDB::new(draft, Utc::now().naive_utc());
                let result_db = diesel::update(
                    events::table
                        .filter(events::id.eq(event_id))
                        .filter(events::owner_user_id.eq(owner_user_id)),
                )
                .set(&changes)
                .returning(EventDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?;
                Ok(result_db.map(Event::from))
            })
            .await
    }

    async fn delete_owned(&self, owner_user_id: &str, event_id: &str) -> Result<usize> {
        let owner_user_id = owner_user_id.to_string();
        let event_id = event_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    events::table
                        .filter(events::id.eq(event_id))
                        .filter(events::owner_user_id.eq(owner_user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    fn get_owned(&self, owner_user_id: &str, event_id: &str) -> Result<Option<Event>> {
        let mut conn = get_connection(&self.pool)?;
        let event_db = events::table
            .filter(events::id.eq(event_id))
            .filter(events::owner_user_id.eq(owner_user_id))
            .select(EventDB::as_select())
            .first::<EventDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(event_db.map(Event::from))
    }

    fn list_in_range(
        &self,
        owner_user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Event>> {
        let mut conn = get_connection(&self.pool)?;
        let events_db = events::table
            .filter(events::owner_user_id.eq(owner_user_id))
            .filter(events::event_date.between(from, to))
            .order((
                events::event_date.asc(),
                events::start_minute.asc(),
                events::id.asc(),
            ))
            .select(EventDB::as_select())
            .load::<EventDB>(&mut conn)
            .into_core()?;
        Ok(events_db.into_iter().map(Event::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer, DbPool};
    use crate::users::UserRepository;
    use tempfile::tempdir;
    use workschedule_core::errors::{DatabaseError, Error};
    use workschedule_core::users::{NewUser, UserRepositoryTrait};

    struct Fixture {
        repo: EventRepository,
        users: UserRepository,
        _pool: Arc<DbPool>,
        _temp_dir: tempfile::TempDir,
    }

    async fn setup() -> Fixture {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        Fixture {
            repo: EventRepository::new(Arc::clone(&pool), writer.clone()),
            users: UserRepository::new(Arc::clone(&pool), writer),
            _pool: pool,
            _temp_dir: temp_dir,
        }
    }

    async fn user(fixture: &Fixture, username: &str) -> String {
        fixture
            .users
            .create(NewUser {
                username: username.to_string(),
                password_hash: "hash".to_string(),
                is_admin: false,
            })
            .await
            .unwrap()
            .id
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(title: &str, event_date: NaiveDate, start_minute: i32, end_minute: i32) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            event_date,
            category_id: None,
            start_minute,
            end_minute,
            color: "#4f46e5".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let fixture = setup().await;
        let alice = user(&fixture, "alice").await;

        let event = fixture
            .repo
            .create(&alice, draft("Gym", date(2025, 3, 10), 420, 480))
            .await
            .unwrap();
        assert_eq!(event.owner_user_id, alice);
        assert_eq!(event.event_date, date(2025, 3, 10));

        let stored = fixture.repo.get_owned(&alice, &event.id).unwrap();
        assert_eq!(stored, Some(event));
    }

    #[tokio::test]
    async fn test_owner_filter_on_every_operation() {
        let fixture = setup().await;
        let alice = user(&fixture, "alice").await;
        let bob = user(&fixture, "bob").await;
        let event = fixture
            .repo
            .create(&alice, draft("Gym", date(2025, 3, 10), 420, 480))
            .await
            .unwrap();

        assert!(fixture.repo.get_owned(&bob, &event.id).unwrap().is_none());
        assert!(fixture
            .repo
            .update_owned(&bob, &event.id, draft("Mine", date(2025, 3, 10), 420, 480))
            .await
            .unwrap()
            .is_none());
        assert_eq!(fixture.repo.delete_owned(&bob, &event.id).await.unwrap(), 0);
        assert!(fixture
            .repo
            .list_in_range(&bob, date(2025, 3, 1), date(2025, 3, 31))
            .unwrap()
            .is_empty());

        let untouched = fixture.repo.get_owned(&alice, &event.id).unwrap().unwrap();
        assert_eq!(untouched.title, "Gym");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let fixture = setup().await;
        let alice = user(&fixture, "alice").await;
        let event = fixture
            .repo
            .create(&alice, draft("Gym", date(2025, 3, 10), 420, 480))
            .await
            .unwrap();

        let updated = fixture
            .repo
            .update_owned(&alice, &event.id, draft("Swim", date(2025, 3, 11), 600, 690))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, event.id);
        assert_eq!(updated.title, "Swim");
        assert_eq!(updated.event_date, date(2025, 3, 11));
        assert_eq!((updated.start_minute, updated.end_minute), (600, 690));
        assert_eq!(updated.created_at, event.created_at);
    }

    #[tokio::test]
    async fn test_range_is_inclusive_and_ordered() {
        let fixture = setup().await;
        let alice = user(&fixture, "alice").await;
        for (title, day, start) in [
            ("late", date(2025, 3, 31), 1200),
            ("second", date(2025, 3, 1), 540),
            ("first", date(2025, 3, 1), 480),
            ("before", date(2025, 2, 28), 480),
            ("after", date(2025, 4, 1), 480),
        ] {
            fixture
                .repo
                .create(&alice, draft(title, day, start, start + 60))
                .await
                .unwrap();
        }

        let titles: Vec<String> = fixture
            .repo
            .list_in_range(&alice, date(2025, 3, 1), date(2025, 3, 31))
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "late"]);
    }

    #[tokio::test]
    async fn test_store_rejects_bad_ranges_and_unknown_owner() {
        let fixture = setup().await;
        let alice = user(&fixture, "alice").await;

        let err = fixture
            .repo
            .create(&alice, draft("Backwards", date(2025, 3, 10), 480, 420))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(_)));

        let err = fixture
            .repo
            .create("nobody", draft("Orphan", date(2025, 3, 10), 420, 480))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
    }
}
