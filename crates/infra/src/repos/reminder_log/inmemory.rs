use super::IReminderLogRepo;
use crate::repos::shared::inmemory_repo::*;
use event_reminder_domain::{ReminderLog, ReminderLogStats};

pub struct InMemoryReminderLogRepo {
    logs: std::sync::Mutex<Vec<ReminderLog>>,
}

impl InMemoryReminderLogRepo {
    pub fn new() -> Self {
        Self {
            logs: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderLogRepo for InMemoryReminderLogRepo {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()> {
        insert(log, &self.logs);
        Ok(())
    }

    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<ReminderLog>> {
        let mut logs = find_by(&self.logs, |_| true);
        logs.sort_by(|l1, l2| l2.sent_at.cmp(&l1.sent_at));
        logs.truncate(limit.max(0) as usize);
        Ok(logs)
    }

    async fn stats(&self) -> anyhow::Result<ReminderLogStats> {
        let logs = find_by(&self.logs, |_| true);
        let mut stats = ReminderLogStats::default();
        for log in logs {
            stats.add(log.status, 1);
        }
        Ok(stats)
    }
}
