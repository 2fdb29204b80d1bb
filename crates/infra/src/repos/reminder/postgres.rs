use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use event_reminder_domain::{Reminder, ReminderFrequency, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use std::num::TryFromIntError;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    event_uid: Uuid,
    recipient_email: String,
    days_before: i32,
    frequency: String,
    custom_frequency_days: Option<i32>,
    is_active: bool,
    last_sent_at: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> anyhow::Result<Self> {
        let frequency = ReminderFrequency::parse_lenient(
            &raw.frequency,
            raw.custom_frequency_days.map(i64::from),
        )?;
        Ok(Self {
            id: raw.reminder_uid.into(),
            event_id: raw.event_uid.into(),
            recipient_email: raw.recipient_email,
            days_before: u32::try_from(raw.days_before)?,
            frequency,
            is_active: raw.is_active,
            last_sent_at: raw.last_sent_at,
            created: raw.created,
        })
    }
}

fn into_reminders(raws: Vec<ReminderRaw>) -> anyhow::Result<Vec<Reminder>> {
    raws.into_iter().map(Reminder::try_from).collect()
}

fn custom_days(reminder: &Reminder) -> Result<Option<i32>, TryFromIntError> {
    reminder
        .frequency
        .custom_frequency_days()
        .map(i32::try_from)
        .transpose()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, event_uid, recipient_email, days_before, frequency, custom_frequency_days, is_active, last_sent_at, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.event_id.inner_ref())
        .bind(&reminder.recipient_email)
        .bind(i32::try_from(reminder.days_before)?)
        .bind(reminder.frequency.kind())
        .bind(custom_days(reminder)?)
        .bind(reminder.is_active)
        .bind(reminder.last_sent_at)
        .bind(reminder.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET recipient_email = $2,
            days_before = $3,
            frequency = $4,
            custom_frequency_days = $5,
            is_active = $6
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.recipient_email)
        .bind(i32::try_from(reminder.days_before)?)
        .bind(reminder.frequency.kind())
        .bind(custom_days(reminder)?)
        .bind(reminder.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        reminder.map(Reminder::try_from).transpose()
    }

    async fn find_many(&self, reminder_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        let reminder_ids = reminder_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();

        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = ANY($1)
            "#,
        )
        .bind(reminder_ids)
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn find_by_events(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Reminder>> {
        let event_ids = event_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();

        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.event_uid = ANY($1)
            ORDER BY r.days_before DESC
            "#,
        )
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.is_active = true
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        reminder.map(Reminder::try_from).transpose()
    }

    async fn delete_by_events(&self, event_ids: &[ID]) -> anyhow::Result<DeleteResult> {
        let event_ids = event_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();

        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.event_uid = ANY($1)
            "#,
        )
        .bind(event_ids)
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn toggle_active(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            UPDATE reminders
            SET is_active = NOT is_active
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        reminder.map(Reminder::try_from).transpose()
    }

    async fn mark_sent(
        &self,
        reminder_id: &ID,
        expected_last_sent_at: Option<DateTime<Utc>>,
        sent_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET last_sent_at = $2
            WHERE reminder_uid = $1
            AND last_sent_at IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(sent_at)
        .bind(expected_last_sent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to mark reminder: {} as sent. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;

        Ok(res.rows_affected() == 1)
    }
}
