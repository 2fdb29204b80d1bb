use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{dtos::ReminderWithEventDTO, get_reminder::*};
use event_reminder_domain::ID;
use event_reminder_infra::ReminderContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(reminder))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::NotFound => AppError::NotFound("Reminder not found".into()),
        })
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };
        let event = ctx
            .repos
            .events
            .find(&reminder.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(ReminderWithEventDTO::new(reminder, event.as_ref()))
    }
}
