mod inmemory;
mod postgres;

use event_reminder_domain::{ReminderLog, ReminderLogStats};
pub use inmemory::InMemoryReminderLogRepo;
pub use postgres::PostgresReminderLogRepo;

#[async_trait::async_trait]
pub trait IReminderLogRepo: Send + Sync {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()>;
    /// The latest `limit` logs, most recent first
    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<ReminderLog>>;
    async fn stats(&self) -> anyhow::Result<ReminderLogStats>;
}
