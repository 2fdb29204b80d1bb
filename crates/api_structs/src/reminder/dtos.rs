use chrono::{DateTime, NaiveDate, Utc};
use event_reminder_domain::{Event, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReminderDTO {
    pub id: ID,
    pub event_id: ID,
    pub recipient_email: String,
    pub days_before: u32,
    pub frequency: String,
    pub custom_frequency_days: Option<u32>,
    pub is_active: bool,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            event_id: reminder.event_id,
            recipient_email: reminder.recipient_email,
            days_before: reminder.days_before,
            frequency: reminder.frequency.kind().to_string(),
            custom_frequency_days: reminder.frequency.custom_frequency_days(),
            is_active: reminder.is_active,
            last_sent_at: reminder.last_sent_at,
            created_at: reminder.created,
        }
    }
}

/// A reminder together with the event it belongs to
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReminderWithEventDTO {
    #[serde(flatten)]
    pub reminder: ReminderDTO,
    pub event_name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_description: Option<String>,
}

impl ReminderWithEventDTO {
    pub fn new(reminder: Reminder, event: Option<&Event>) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
            event_name: event.map(|e| e.name.clone()),
            event_date: event.map(|e| e.event_date),
            event_description: event.and_then(|e| e.description.clone()),
        }
    }
}
