mod create_reminder;
mod delete_reminder;
mod get_event_reminders;
mod get_reminder;
mod get_reminders;
mod toggle_reminder;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use event_reminder_api_structs::dtos::ReminderWithEventDTO;
use event_reminder_domain::{Event, Reminder};
use event_reminder_infra::ReminderContext;
use get_event_reminders::get_event_reminders_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use std::collections::HashMap;
use toggle_reminder::toggle_reminder_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/reminders/event/{event_id}",
        web::get().to(get_event_reminders_controller),
    );
    cfg.route("/reminders/{reminder_id}", web::get().to(get_reminder_controller));
    cfg.route("/reminders/{reminder_id}", web::put().to(update_reminder_controller));
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/toggle",
        web::patch().to(toggle_reminder_controller),
    );
}

/// Attaches the event of each reminder, keeping the order of `reminders`
async fn with_events(
    reminders: Vec<Reminder>,
    ctx: &ReminderContext,
) -> anyhow::Result<Vec<ReminderWithEventDTO>> {
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
        .collect::<HashMap<_, Event>>();

    Ok(reminders
        .into_iter()
        .map(|reminder| {
            let event = events.get(&reminder.event_id);
            ReminderWithEventDTO::new(reminder, event)
        })
        .collect())
}
