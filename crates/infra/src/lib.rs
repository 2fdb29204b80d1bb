mod config;
mod repos;
mod services;
mod system;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
pub use config::Config;
pub use repos::{IReminderLogRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
    /// Held for the whole duration of a scheduler run so that runs never overlap
    pub scheduler_lock: Arc<Mutex<()>>,
}

impl ReminderContext {
    fn new(repos: Repos, config: Config) -> Self {
        let notifier = Arc::new(SimulatedEmailNotifier::new(repos.reminder_logs.clone()));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
            scheduler_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Context backed by the in-memory repositories
    pub fn create_inmemory(config: Config) -> Self {
        Self::new(Repos::create_inmemory(), config)
    }

    /// The current instant in the configured reminder timezone
    pub fn local_now(&self) -> DateTime<Tz> {
        self.sys.now().with_timezone(&self.config.timezone)
    }

    pub fn utc_now(&self) -> DateTime<Utc> {
        self.sys.now()
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    let config = Config::new();
    let repos = match &config.database_url {
        Some(connection_string) => Repos::create_postgres(connection_string).await?,
        None => Repos::create_inmemory(),
    };
    Ok(ReminderContext::new(repos, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn local_now_uses_configured_timezone() {
        let config = Config {
            timezone: chrono_tz::Pacific::Auckland,
            ..Config::default()
        };
        let mut ctx = ReminderContext::create_inmemory(config);
        ctx.sys = Arc::new(StaticTimeSys(
            Utc.with_ymd_and_hms(2026, 10, 16, 20, 0, 0).unwrap(),
        ));

        assert_eq!(
            ctx.local_now().date_naive(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
        assert_eq!(
            ctx.utc_now().date_naive(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
    }
}
