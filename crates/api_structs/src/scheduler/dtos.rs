use chrono::{DateTime, NaiveDate, Utc};
use event_reminder_domain::{ReminderLog, ID};
use serde::{Deserialize, Serialize};

/// Outcome of one reminder in a scheduler run
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RunDetailDTO {
    pub reminder_id: ID,
    pub event_name: String,
    pub recipient_email: String,
    pub days_until: i64,
    pub frequency: String,
    pub reason: String,
    pub sent: bool,
    /// `sent`, `skipped` or `error`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummaryDTO {
    pub checked: i64,
    pub sent: i64,
    pub skipped: i64,
    pub errors: i64,
}

/// What a scheduler run would do with one reminder
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PreviewDetailDTO {
    pub reminder_id: ID,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub recipient_email: String,
    pub days_until: i64,
    pub frequency: String,
    pub would_send: bool,
    pub reason: String,
    pub last_sent: Option<DateTime<Utc>>,
}

/// A delivery log entry with the settings of its reminder, if it still exists
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReminderLogDTO {
    pub id: ID,
    pub event_name: String,
    pub recipient_email: String,
    pub status: String,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
    pub frequency: Option<String>,
    pub days_before: Option<u32>,
}

impl ReminderLogDTO {
    pub fn new(log: ReminderLog, frequency: Option<String>, days_before: Option<u32>) -> Self {
        Self {
            id: log.id,
            event_name: log.event_name,
            recipient_email: log.recipient_email,
            status: log.status.as_str().to_string(),
            message: log.message,
            error_message: log.error_message,
            sent_at: log.sent_at,
            frequency,
            days_before,
        }
    }
}
