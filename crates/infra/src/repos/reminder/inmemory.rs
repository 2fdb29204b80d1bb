use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use event_reminder_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        find_and_update(&reminder.id, &self.reminders, |stored| {
            *stored = Reminder {
                last_sent_at: stored.last_sent_at,
                ..reminder.clone()
            };
            true
        });
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_many(&self, reminder_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| reminder_ids.contains(&r.id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |_| true);
        reminders.sort_by(|r1, r2| r2.created.cmp(&r1.created));
        Ok(reminders)
    }

    async fn find_by_events(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| event_ids.contains(&r.event_id));
        reminders.sort_by(|r1, r2| r2.days_before.cmp(&r1.days_before));
        Ok(reminders)
    }

    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.is_active))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }

    async fn delete_by_events(&self, event_ids: &[ID]) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| event_ids.contains(&r.event_id)))
    }

    async fn toggle_active(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find_and_update(reminder_id, &self.reminders, |r| {
            r.is_active = !r.is_active;
            true
        }))
    }

    async fn mark_sent(
        &self,
        reminder_id: &ID,
        expected_last_sent_at: Option<DateTime<Utc>>,
        sent_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let updated = find_and_update(reminder_id, &self.reminders, |r| {
            if r.last_sent_at != expected_last_sent_at {
                return false;
            }
            r.last_sent_at = Some(sent_at);
            true
        });
        Ok(updated.is_some())
    }
}
