use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::create_reminder::*;
use event_reminder_domain::{
    parse_days_before, InvalidFrequencyError, Reminder, ReminderFrequency, ID, MAX_DAYS,
};
use event_reminder_infra::ReminderContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = match (
        body.event_id,
        required(body.recipient_email),
        body.days_before,
        required(body.frequency),
    ) {
        (Some(event_id), Some(recipient_email), Some(days_before), Some(frequency)) => {
            CreateReminderUseCase {
                event_id,
                recipient_email,
                days_before,
                frequency,
                custom_frequency_days: body.custom_frequency_days,
            }
        }
        _ => {
            return Err(AppError::BadClientData(
                "event_id, recipient_email, days_before and frequency are required".into(),
            ))
        }
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::from(reminder)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub event_id: ID,
    pub recipient_email: String,
    pub days_before: i64,
    pub frequency: String,
    pub custom_frequency_days: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidDaysBefore(i64),
    InvalidFrequency(InvalidFrequencyError),
    EventNotFound,
    LeadTimeTooLong { days_before: i64, days_until: i64 },
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidDaysBefore(days) => Self::BadClientData(format!(
                "days_before must be between 0 and {} days, got: {}",
                MAX_DAYS,
                days
            )),
            UseCaseError::InvalidFrequency(e) => Self::BadClientData(e.to_string()),
            UseCaseError::EventNotFound => Self::NotFound("Event not found".into()),
            UseCaseError::LeadTimeTooLong {
                days_before,
                days_until,
            } => Self::BadClientData(format!(
                "days_before ({}) cannot be greater than the number of days until the event ({})",
                days_before, days_until
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let days_before = parse_days_before(self.days_before)
            .ok_or(UseCaseError::InvalidDaysBefore(self.days_before))?;
        let frequency = ReminderFrequency::parse(&self.frequency, self.custom_frequency_days)
            .map_err(UseCaseError::InvalidFrequency)?;

        let event = match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(UseCaseError::EventNotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };
        let days_until = event.days_until(ctx.local_now().date_naive());
        if self.days_before > days_until {
            return Err(UseCaseError::LeadTimeTooLong {
                days_before: self.days_before,
                days_until,
            });
        }

        let reminder = Reminder {
            id: Default::default(),
            event_id: event.id,
            recipient_email: self.recipient_email.clone(),
            days_before,
            frequency,
            is_active: true,
            last_sent_at: None,
            created: ctx.sys.now(),
        };
        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
