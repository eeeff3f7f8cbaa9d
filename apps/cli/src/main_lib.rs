use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use workschedule_core::{
    calendar::{CalendarService, CalendarServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    events::{EventService, EventServiceTrait},
    users::{UserService, UserServiceTrait},
};
use workschedule_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, CategoryRepository, EventRepository,
    UserRepository,
};

use crate::config::Config;
use crate::credentials::Argon2CredentialHasher;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub event_service: Arc<dyn EventServiceTrait>,
    pub calendar_service: Arc<dyn CalendarServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays machine readable.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Opens (and migrates) the database and wires every service.
///
/// Must run inside a Tokio runtime; the write actor is spawned here.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = init(&config.db_path)?;
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let event_repository = Arc::new(EventRepository::new(pool.clone(), writer));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2CredentialHasher::default()),
    ));
    let category_service = Arc::new(CategoryService::new(category_repository.clone()));
    let event_service = Arc::new(EventService::new(event_repository, category_repository));
    let calendar_service = Arc::new(CalendarService::new(event_service.clone()));

    tracing::debug!("Application state ready for {}", db_path);
    Ok(Arc::new(AppState {
        user_service,
        category_service,
        event_service,
        calendar_service,
        db_path,
    }))
}
