use crate::date::days_until;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

/// A dated occasion owned by a `User` that `Reminder`s are attached to
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub created: DateTime<Utc>,
}

impl Event {
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        days_until(self.event_date, today)
    }

    pub fn has_passed(&self, today: NaiveDate) -> bool {
        self.event_date < today
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
