use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

#[derive(Error, Debug)]
#[error("Unknown delivery status: `{0}`")]
pub struct InvalidDeliveryStatusError(String);

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = InvalidDeliveryStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(InvalidDeliveryStatusError(s.to_string())),
        }
    }
}

/// Audit record of one delivery attempt of a `Reminder`
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderLog {
    pub id: ID,
    /// Cleared when the `Reminder` is deleted, the log itself is kept
    pub reminder_id: Option<ID>,
    pub event_name: String,
    pub recipient_email: String,
    pub status: DeliveryStatus,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl ReminderLog {
    pub fn sent(
        reminder_id: ID,
        event_name: String,
        recipient_email: String,
        message: String,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            reminder_id: Some(reminder_id),
            event_name,
            recipient_email,
            status: DeliveryStatus::Sent,
            message: Some(message),
            error_message: None,
            sent_at,
        }
    }

    pub fn failed(
        reminder_id: ID,
        event_name: String,
        recipient_email: String,
        error_message: String,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            reminder_id: Some(reminder_id),
            event_name,
            recipient_email,
            status: DeliveryStatus::Failed,
            message: None,
            error_message: Some(error_message),
            sent_at,
        }
    }
}

impl Entity for ReminderLog {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderLogStats {
    pub total: i64,
    pub sent: i64,
    pub failed: i64,
}

impl ReminderLogStats {
    pub fn add(&mut self, status: DeliveryStatus, count: i64) {
        match status {
            DeliveryStatus::Sent => self.sent += count,
            DeliveryStatus::Failed => self.failed += count,
        }
        self.total += count;
    }
}
