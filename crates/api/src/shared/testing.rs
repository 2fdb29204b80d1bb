use chrono::{DateTime, NaiveDate, Utc};
use event_reminder_domain::{Event, Reminder, ReminderFrequency, Tz, User};
use event_reminder_infra::{Config, ReminderContext, StaticTimeSys};
use std::sync::Arc;

/// In-memory context frozen at `now`, counting days in UTC
pub fn setup_context(now: DateTime<Utc>) -> ReminderContext {
    let mut ctx = ReminderContext::create_inmemory(Config::default());
    ctx.config.timezone = Tz::UTC;
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx
}

pub async fn insert_user(ctx: &ReminderContext, email: &str) -> User {
    let user = User::new("Ada".into(), email.into(), ctx.sys.now());
    ctx.repos.users.insert(&user).await.unwrap();
    user
}

pub async fn insert_event(ctx: &ReminderContext, user: &User, event_date: NaiveDate) -> Event {
    let event = Event {
        id: Default::default(),
        user_id: user.id.clone(),
        name: "Launch".into(),
        description: Some("Ship it".into()),
        event_date,
        created: ctx.sys.now(),
    };
    ctx.repos.events.insert(&event).await.unwrap();
    event
}

pub async fn insert_reminder(
    ctx: &ReminderContext,
    event: &Event,
    days_before: u32,
    frequency: ReminderFrequency,
    last_sent_at: Option<DateTime<Utc>>,
) -> Reminder {
    let reminder = Reminder {
        id: Default::default(),
        event_id: event.id.clone(),
        recipient_email: "grace@example.com".into(),
        days_before,
        frequency,
        is_active: true,
        last_sent_at,
        created: ctx.sys.now(),
    };
    ctx.repos.reminders.insert(&reminder).await.unwrap();
    reminder
}
