use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;

use workschedule_core::calendar::{HourRange, YearMonth};
use workschedule_core::categories::NewCategory;
use workschedule_core::constants::{
    DEFAULT_CATEGORY_COLOR, DEFAULT_EVENT_COLOR, DEFAULT_WEEK_END_HOUR, DEFAULT_WEEK_START_HOUR,
};
use workschedule_core::errors::ValidationError;
use workschedule_core::events::EventInput;
use workschedule_core::users::Registration;
use workschedule_core::utils::{local_today, parse_strict_date};
use workschedule_core::Caller;

use crate::config::Config;
use crate::main_lib::AppState;

#[derive(Parser, Debug)]
#[command(name = "workschedule")]
#[command(about = "Manage accounts, categories and calendar events of a Work Schedule database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Create the admin account, or reset its password and admin flag
    CreateAdmin {
        /// Falls back to WS_ADMIN_PASSWORD
        #[arg(long)]
        password: Option<String>,
    },
    /// Register a regular user
    Register {
        username: String,

        #[arg(long)]
        password: String,
    },
    /// Print the month grid as JSON
    Month {
        #[command(flatten)]
        login: Login,

        /// YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Print the week grid as JSON
    Week {
        #[command(flatten)]
        login: Login,

        /// Any day of the week (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value_t = DEFAULT_WEEK_START_HOUR)]
        start_hour: u32,

        #[arg(long, default_value_t = DEFAULT_WEEK_END_HOUR)]
        end_hour: u32,
    },
    /// Manage your own events
    #[command(subcommand)]
    Event(EventCommand),
    /// List or (as admin) manage the shared categories
    #[command(subcommand)]
    Category(CategoryCommand),
}

#[derive(Subcommand, Debug)]
pub enum EventCommand {
    Add {
        #[command(flatten)]
        login: Login,

        #[arg(long)]
        title: String,

        /// YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// HH:MM
        #[arg(long)]
        start: String,

        /// HH:MM
        #[arg(long)]
        end: String,

        #[arg(long, default_value = DEFAULT_EVENT_COLOR)]
        color: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Id of a shared category
        #[arg(long)]
        category: Option<String>,
    },
    List {
        #[command(flatten)]
        login: Login,

        /// YYYY-MM-DD, inclusive
        #[arg(long)]
        from: String,

        /// YYYY-MM-DD, inclusive
        #[arg(long)]
        to: String,
    },
    Delete {
        #[command(flatten)]
        login: Login,

        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    List {
        #[command(flatten)]
        login: Login,
    },
    /// Create a category or change its color
    Set {
        #[command(flatten)]
        login: Login,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = DEFAULT_CATEGORY_COLOR)]
        color: String,
    },
    Delete {
        #[command(flatten)]
        login: Login,

        id: String,
    },
}

#[derive(Args, Debug)]
pub struct Login {
    #[arg(short, long)]
    pub username: String,

    #[arg(long, env = "WS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl Login {
    fn caller(&self, state: &AppState) -> Result<Caller> {
        let user = state
            .user_service
            .authenticate(&self.username, &self.password)?;
        Ok(state.user_service.resolve_caller(Some(&user.id))?)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_date(value: &str) -> Result<chrono::NaiveDate> {
    parse_strict_date(value.trim()).ok_or_else(|| anyhow!(ValidationError::InvalidDate))
}

pub async fn run(cli: Cli, config: &Config, state: Arc<AppState>) -> Result<()> {
    match cli.command {
        Commands::Migrate => {
            tracing::info!("Database at {} is up to date", state.db_path);
            Ok(())
        }
        Commands::CreateAdmin { password } => {
            let Some(password) = password.or_else(|| config.admin_password.clone()) else {
                bail!("Pass --password or set WS_ADMIN_PASSWORD");
            };
            let admin = state.user_service.provision_admin(&password).await?;
            print_json(&admin)
        }
        Commands::Register { username, password } => {
            let user = state
                .user_service
                .register(Registration { username, password })
                .await?;
            print_json(&user)
        }
        Commands::Month { login, month } => {
            let caller = login.caller(&state)?;
            let today = local_today();
            let month = match month {
                Some(value) => YearMonth::parse(&value)?,
                None => YearMonth::from_date(today),
            };
            let grid = state.calendar_service.month_view(&caller, month, today)?;
            print_json(&grid)
        }
        Commands::Week {
            login,
            date,
            start_hour,
            end_hour,
        } => {
            let caller = login.caller(&state)?;
            let today = local_today();
            let date = match date {
                Some(value) => parse_date(&value)?,
                None => today,
            };
            let hours = HourRange::new(start_hour, end_hour)?;
            let grid = state
                .calendar_service
                .week_view(&caller, date, hours, today)?;
            print_json(&grid)
        }
        Commands::Event(command) => run_event(command, &state).await,
        Commands::Category(command) => run_category(command, &state).await,
    }
}

async fn run_event(command: EventCommand, state: &AppState) -> Result<()> {
    match command {
        EventCommand::Add {
            login,
            title,
            date,
            start,
            end,
            color,
            description,
            category,
        } => {
            let caller = login.caller(state)?;
            let input = EventInput {
                title,
                description,
                date,
                start_time: start,
                end_time: end,
                color,
                category_id: category,
            };
            let event = state.event_service.create_event(&caller, input).await?;
            print_json(&event)
        }
        EventCommand::List { login, from, to } => {
            let caller = login.caller(state)?;
            let events = state.event_service.list_events_in_range(
                &caller,
                parse_date(&from)?,
                parse_date(&to)?,
            )?;
            print_json(&events)
        }
        EventCommand::Delete { login, id } => {
            let caller = login.caller(state)?;
            state.event_service.delete_event(&caller, &id).await?;
            tracing::info!("Deleted event {}", id);
            Ok(())
        }
    }
}

async fn run_category(command: CategoryCommand, state: &AppState) -> Result<()> {
    match command {
        CategoryCommand::List { login } => {
            let caller = login.caller(state)?;
            print_json(&state.category_service.list_global_categories(&caller)?)
        }
        CategoryCommand::Set { login, name, color } => {
            let caller = login.caller(state)?;
            let category = state
                .category_service
                .upsert_global_category(&caller, NewCategory { name, color })
                .await?;
            print_json(&category)
        }
        CategoryCommand::Delete { login, id } => {
            let caller = login.caller(state)?;
            state
                .category_service
                .delete_global_category(&caller, &id)
                .await?;
            tracing::info!("Deleted category {}", id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_week_defaults() {
        let cli = Cli::try_parse_from([
            "workschedule",
            "week",
            "--username",
            "alice",
            "--password",
            "secret123",
        ])
        .unwrap();
        match cli.command {
            Commands::Week {
                login,
                date,
                start_hour,
                end_hour,
            } => {
                assert_eq!(login.username, "alice");
                assert_eq!(date, None);
                assert_eq!((start_hour, end_hour), (6, 22));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_add() {
        let cli = Cli::try_parse_from([
            "workschedule",
            "event",
            "add",
            "-u",
            "alice",
            "--password",
            "secret123",
            "--title",
            "Gym",
            "--date",
            "2025-03-10",
            "--start",
            "07:00",
            "--end",
            "08:00",
        ])
        .unwrap();
        match cli.command {
            Commands::Event(EventCommand::Add {
                title,
                color,
                category,
                ..
            }) => {
                assert_eq!(title, "Gym");
                assert_eq!(color, DEFAULT_EVENT_COLOR);
                assert_eq!(category, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_date_is_strict() {
        assert!(parse_date("2025-03-10").is_ok());
        let err = parse_date("2024-02-30").unwrap_err();
        assert_eq!(err.to_string(), "Date must be YYYY-MM-DD.");
    }
}
