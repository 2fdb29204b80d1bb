use super::with_events;
use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::get_reminders::*;
use event_reminder_infra::ReminderContext;

pub async fn get_reminders_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(reminders))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Lists every reminder, newest first
#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        with_events(reminders, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
