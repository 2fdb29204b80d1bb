use chrono::NaiveDate;
use event_reminder_domain::{Event, Reminder};
use event_reminder_infra::ReminderContext;
use std::collections::HashMap;

/// An active reminder whose event has not passed yet
#[derive(Debug, Clone)]
pub struct Candidate {
    pub reminder: Reminder,
    pub event: Event,
    /// Calendar days from `today` until the event, never negative
    pub days_until: i64,
}

/// Loads everything a scheduler run or preview evaluates, soonest event first.
/// Reminders whose event no longer exists are left out.
pub async fn load_candidates(
    ctx: &ReminderContext,
    today: NaiveDate,
) -> anyhow::Result<Vec<Candidate>> {
    let reminders = ctx.repos.reminders.find_active().await?;

    let event_ids = reminders
        .iter()
        .map(|r| r.event_id.clone())
        .collect::<Vec<_>>();
    let events = ctx
        .repos
        .events
        .find_many(&event_ids)
        .await?
        .into_iter()
        .map(|e| (e.id.clone(), e))
        .collect::<HashMap<_, _>>();

    let mut candidates = reminders
        .into_iter()
        .filter_map(|reminder| {
            let event = events.get(&reminder.event_id)?;
            if event.has_passed(today) {
                return None;
            }
            Some(Candidate {
                days_until: event.days_until(today),
                event: event.clone(),
                reminder,
            })
        })
        .collect::<Vec<_>>();
    candidates.sort_by_key(|c| c.event.event_date);

    Ok(candidates)
}
