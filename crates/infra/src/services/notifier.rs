use crate::repos::IReminderLogRepo;
use chrono::{DateTime, Utc};
use event_reminder_domain::{ReminderEmail, ReminderLog};
use std::sync::Arc;
use tracing::{error, info};

/// Delivers reminder notifications and records every attempt in the reminder log
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    /// Returns an error when the notification could not be delivered.
    /// The reminder must then not be marked as sent.
    async fn send_reminder(&self, email: &ReminderEmail, sent_at: DateTime<Utc>) -> anyhow::Result<()>;
}

/// Prints the rendered email to the log instead of talking to a mail server.
/// Delivery succeeds when the `sent` log entry is stored.
pub struct SimulatedEmailNotifier {
    logs: Arc<dyn IReminderLogRepo>,
}

impl SimulatedEmailNotifier {
    pub fn new(logs: Arc<dyn IReminderLogRepo>) -> Self {
        Self { logs }
    }
}

#[async_trait::async_trait]
impl INotifier for SimulatedEmailNotifier {
    async fn send_reminder(&self, email: &ReminderEmail, sent_at: DateTime<Utc>) -> anyhow::Result<()> {
        let body = email.render();
        info!("\n{}\n", body);

        let sent = ReminderLog::sent(
            email.reminder_id.clone(),
            email.event_name.clone(),
            email.to.clone(),
            body,
            sent_at,
        );
        if let Err(e) = self.logs.insert(&sent).await {
            error!(
                "Unable to log the email for reminder: {}. Error: {:?}",
                email.reminder_id, e
            );
            let failed = ReminderLog::failed(
                email.reminder_id.clone(),
                email.event_name.clone(),
                email.to.clone(),
                e.to_string(),
                sent_at,
            );
            if let Err(e) = self.logs.insert(&failed).await {
                error!(
                    "Unable to log the failed delivery for reminder: {}. Error: {:?}",
                    email.reminder_id, e
                );
            }
            return Err(e);
        }

        Ok(())
    }
}
