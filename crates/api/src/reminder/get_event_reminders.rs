use super::with_events;
use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::get_event_reminders::*;
use event_reminder_domain::ID;
use event_reminder_infra::ReminderContext;

pub async fn get_event_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetEventRemindersUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(reminders))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Reminders of one event, longest lead time first. An unknown event has no reminders.
#[derive(Debug)]
pub struct GetEventRemindersUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventRemindersUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetEventReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_by_events(&[self.event_id.clone()])
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        with_events(reminders, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
