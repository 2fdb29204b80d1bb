use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::update_reminder::*;
use event_reminder_domain::{
    parse_days_before, InvalidFrequencyError, Reminder, ReminderFrequency, ID, MAX_DAYS,
};
use event_reminder_infra::ReminderContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = match (
        required(body.recipient_email),
        body.days_before,
        required(body.frequency),
    ) {
        (Some(recipient_email), Some(days_before), Some(frequency)) => UpdateReminderUseCase {
            reminder_id: path_params.reminder_id.clone(),
            recipient_email,
            days_before,
            frequency,
            custom_frequency_days: body.custom_frequency_days,
            is_active: body.is_active.unwrap_or(true),
        },
        _ => {
            return Err(AppError::BadClientData(
                "recipient_email, days_before and frequency are required".into(),
            ))
        }
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::from(reminder)))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::InvalidDaysBefore(days) => AppError::BadClientData(format!(
                "days_before must be between 0 and {} days, got: {}",
                MAX_DAYS,
                days
            )),
            UseCaseError::InvalidFrequency(e) => AppError::BadClientData(e.to_string()),
            UseCaseError::NotFound => AppError::NotFound("Reminder not found".into()),
        })
}

/// Replaces the settings of a reminder. Its send history is kept.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub recipient_email: String,
    pub days_before: i64,
    pub frequency: String,
    pub custom_frequency_days: Option<i64>,
    pub is_active: bool,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidDaysBefore(i64),
    InvalidFrequency(InvalidFrequencyError),
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let days_before = parse_days_before(self.days_before)
            .ok_or(UseCaseError::InvalidDaysBefore(self.days_before))?;
        let frequency = ReminderFrequency::parse_lenient(&self.frequency, self.custom_frequency_days)
            .map_err(UseCaseError::InvalidFrequency)?;

        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        reminder.recipient_email = self.recipient_email.clone();
        reminder.days_before = days_before;
        reminder.frequency = frequency;
        reminder.is_active = self.is_active;
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
