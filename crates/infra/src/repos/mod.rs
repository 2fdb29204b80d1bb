mod event;
mod health;
mod reminder;
mod reminder_log;
mod shared;
mod user;

use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
use health::{IHealthRepo, InMemoryHealthRepo, PostgresHealthRepo};
use reminder::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
pub use reminder_log::IReminderLogRepo;
use reminder_log::{InMemoryReminderLogRepo, PostgresReminderLogRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub reminder_logs: Arc<dyn IReminderLogRepo>,
    pub health: Arc<dyn IHealthRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            reminder_logs: Arc::new(PostgresReminderLogRepo::new(pool.clone())),
            health: Arc::new(PostgresHealthRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            reminder_logs: Arc::new(InMemoryReminderLogRepo::new()),
            health: Arc::new(InMemoryHealthRepo {}),
        }
    }
}
