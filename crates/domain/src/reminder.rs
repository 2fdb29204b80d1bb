use crate::policy::ReminderSnapshot;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use thiserror::Error;

/// How often a `Reminder` may fire once its lead time window is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderFrequency {
    /// Fires exactly `days_before` days before the event and never again
    Once,
    /// Fires at most once per calendar day
    Daily,
    /// Fires when at least seven whole days have elapsed since the last send
    Weekly,
    /// Fires when at least `every_days` whole days have elapsed since the last send
    Custom { every_days: u32 },
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidFrequencyError {
    #[error("Invalid frequency: `{0}`. Use: once, daily, weekly, custom")]
    Unknown(String),
    #[error("The custom frequency requires custom_frequency_days")]
    MissingCustomDays,
    #[error("custom_frequency_days must be between 1 and 2147483647, got: {0}")]
    InvalidCustomDays(i64),
}

/// Upper bound of every day count stored on a `Reminder`
pub const MAX_DAYS: u32 = i32::MAX as u32;

/// Validates a lead time given by a client
pub fn parse_days_before(days: i64) -> Option<u32> {
    u32::try_from(days).ok().filter(|days| *days <= MAX_DAYS)
}

impl ReminderFrequency {
    pub const KINDS: [&'static str; 4] = ["once", "daily", "weekly", "custom"];

    /// Parses a frequency given by a client creating a new `Reminder`.
    /// A `custom` frequency must come with its day count.
    pub fn parse(kind: &str, custom_days: Option<i64>) -> Result<Self, InvalidFrequencyError> {
        match (kind, custom_days) {
            ("custom", None) => Err(InvalidFrequencyError::MissingCustomDays),
            _ => Self::parse_lenient(kind, custom_days),
        }
    }

    /// Like `parse` but a `custom` frequency without a day count
    /// falls back to every day. Used for updates and stored rows.
    pub fn parse_lenient(kind: &str, custom_days: Option<i64>) -> Result<Self, InvalidFrequencyError> {
        match kind {
            "once" => Ok(Self::Once),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "custom" => {
                let days = custom_days.unwrap_or(1);
                if days < 1 || days > MAX_DAYS as i64 {
                    return Err(InvalidFrequencyError::InvalidCustomDays(days));
                }
                Ok(Self::Custom {
                    every_days: days as u32,
                })
            }
            _ => Err(InvalidFrequencyError::Unknown(kind.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Custom { .. } => "custom",
        }
    }

    pub fn custom_frequency_days(&self) -> Option<u32> {
        match self {
            Self::Custom { every_days } => Some(*every_days),
            _ => None,
        }
    }
}

impl Display for ReminderFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A rule attached to an `Event` telling when and how often
/// `recipient_email` should be notified before the event date.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub event_id: ID,
    pub recipient_email: String,
    /// Lead time in calendar days before the event at which the reminder window opens
    pub days_before: u32,
    pub frequency: ReminderFrequency,
    /// Inactive reminders are ignored by the scheduler
    pub is_active: bool,
    /// `None` until the first successful send. Only the scheduler updates it.
    pub last_sent_at: Option<DateTime<Utc>>,
    pub created: DateTime<Utc>,
}

impl Reminder {
    pub fn snapshot(&self) -> ReminderSnapshot {
        ReminderSnapshot {
            days_before: self.days_before,
            frequency: self.frequency,
            last_sent_at: self.last_sent_at,
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
