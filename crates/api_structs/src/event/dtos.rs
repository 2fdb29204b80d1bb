use crate::dtos::ReminderDTO;
use chrono::{DateTime, NaiveDate, Utc};
use event_reminder_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            name: event.name,
            description: event.description,
            event_date: event.event_date,
            created_at: event.created,
        }
    }
}

/// An event as listed in the overview, with its owner and active reminder count
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventOverviewDTO {
    #[serde(flatten)]
    pub event: EventDTO,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub days_until: i64,
    pub reminder_count: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventDetailsDTO {
    #[serde(flatten)]
    pub event: EventDTO,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub days_until: i64,
    pub reminders: Vec<ReminderDTO>,
}
