use super::IReminderLogRepo;
use chrono::{DateTime, Utc};
use event_reminder_domain::{DeliveryStatus, ReminderLog, ReminderLogStats};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderLogRepo {
    pool: PgPool,
}

impl PostgresReminderLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderLogRaw {
    log_uid: Uuid,
    reminder_uid: Option<Uuid>,
    event_name: String,
    recipient_email: String,
    status: String,
    message: Option<String>,
    error_message: Option<String>,
    sent_at: DateTime<Utc>,
}

impl TryFrom<ReminderLogRaw> for ReminderLog {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderLogRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.log_uid.into(),
            reminder_id: raw.reminder_uid.map(|id| id.into()),
            event_name: raw.event_name,
            recipient_email: raw.recipient_email,
            status: raw.status.parse()?,
            message: raw.message,
            error_message: raw.error_message,
            sent_at: raw.sent_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct StatusCountRaw {
    status: String,
    count: i64,
}

#[async_trait::async_trait]
impl IReminderLogRepo for PostgresReminderLogRepo {
    async fn insert(&self, log: &ReminderLog) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_logs
            (log_uid, reminder_uid, event_name, recipient_email, status, message, error_message, sent_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(log.id.inner_ref())
        .bind(log.reminder_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&log.event_name)
        .bind(&log.recipient_email)
        .bind(log.status.as_str())
        .bind(&log.message)
        .bind(&log.error_message)
        .bind(log.sent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder log: {:?}. DB returned error: {:?}",
                log, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<ReminderLog>> {
        let logs = sqlx::query_as::<_, ReminderLogRaw>(
            r#"
            SELECT * FROM reminder_logs
            ORDER BY sent_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        logs.into_iter().map(ReminderLog::try_from).collect()
    }

    async fn stats(&self) -> anyhow::Result<ReminderLogStats> {
        let counts = sqlx::query_as::<_, StatusCountRaw>(
            r#"
            SELECT status, COUNT(*) AS count FROM reminder_logs
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut stats = ReminderLogStats::default();
        for row in counts {
            stats.add(row.status.parse::<DeliveryStatus>()?, row.count);
        }
        Ok(stats)
    }
}
