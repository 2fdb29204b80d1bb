use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{
    dtos::{EventDTO, EventOverviewDTO},
    get_events::*,
};
use event_reminder_infra::ReminderContext;
use std::collections::HashMap;

pub async fn get_events_controller(ctx: web::Data<ReminderContext>) -> Result<HttpResponse, AppError> {
    execute(GetEventsUseCase {}, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(events))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Lists every event soonest first with its owner and number of active reminders
#[derive(Debug)]
pub struct GetEventsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.local_now().date_naive();
        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let user_ids = events.iter().map(|e| e.user_id.clone()).collect::<Vec<_>>();
        let users = ctx
            .repos
            .users
            .find_many(&user_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect::<HashMap<_, _>>();

        let event_ids = events.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
        let mut active_reminders = HashMap::new();
        for reminder in ctx
            .repos
            .reminders
            .find_by_events(&event_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter(|r| r.is_active)
        {
            *active_reminders.entry(reminder.event_id).or_insert(0) += 1;
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let user = users.get(&event.user_id);
                EventOverviewDTO {
                    user_name: user.map(|u| u.name.clone()),
                    user_email: user.map(|u| u.email.clone()),
                    days_until: event.days_until(today),
                    reminder_count: active_reminders.get(&event.id).copied().unwrap_or(0),
                    event: EventDTO::new(event),
                }
            })
            .collect())
    }
}
