mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use event_reminder_domain::{Reminder, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Updates the user editable fields. `last_sent_at` is only written by `mark_sent`.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find_many(&self, reminder_ids: &[ID]) -> anyhow::Result<Vec<Reminder>>;
    /// All reminders, newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Reminders of the given events, longest lead time first
    async fn find_by_events(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Reminder>>;
    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn delete_by_events(&self, event_ids: &[ID]) -> anyhow::Result<DeleteResult>;
    /// Flips `is_active` and returns the updated reminder
    async fn toggle_active(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// Sets `last_sent_at` to `sent_at` only if it still equals `expected_last_sent_at`.
    /// Returns false when the reminder is gone or was marked by someone else in between.
    async fn mark_sent(
        &self,
        reminder_id: &ID,
        expected_last_sent_at: Option<DateTime<Utc>>,
        sent_at: DateTime<Utc>,
    ) -> anyhow::Result<bool>;
}
