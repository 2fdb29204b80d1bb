use chrono_tz::Tz;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. The in-memory repositories are used when absent.
    pub database_url: Option<String>,
    /// Timezone defining the calendar day used for "days until the event"
    /// and for the once-per-day check of daily reminders
    pub timezone: Tz,
    /// When set, the scheduler also runs in the background with this period.
    /// Otherwise it is only triggered through the API.
    pub scheduler_interval_secs: Option<u64>,
    /// Number of log entries returned by the history endpoint when no limit is given
    pub history_default_limit: i64,
}

const DEFAULT_PORT: usize = 5000;

fn parse_port(port: Option<String>) -> usize {
    match port {
        None => DEFAULT_PORT,
        Some(port) => match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
    }
}

fn parse_timezone(timezone: Option<String>) -> Tz {
    match timezone {
        None => Tz::UTC,
        Some(timezone) => match timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!(
                    "The given REMINDER_TIMEZONE: {} is not a valid IANA timezone, falling back to UTC.",
                    timezone
                );
                Tz::UTC
            }
        },
    }
}

fn parse_scheduler_interval(interval: Option<String>) -> Option<u64> {
    let interval = interval?;
    match interval.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            warn!(
                "The given SCHEDULER_INTERVAL_SECS: {} is not a positive number of seconds, the background scheduler is disabled.",
                interval
            );
            None
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            warn!("Did not find DATABASE_URL environment variable. Going to use in-memory storage.");
        }

        Self {
            port: parse_port(std::env::var("PORT").ok()),
            database_url,
            timezone: parse_timezone(std::env::var("REMINDER_TIMEZONE").ok()),
            scheduler_interval_secs: parse_scheduler_interval(
                std::env::var("SCHEDULER_INTERVAL_SECS").ok(),
            ),
            history_default_limit: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
