use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::update_event::*;
use event_reminder_domain::{parse_event_date, Event, InvalidDateError, ID};
use event_reminder_infra::ReminderContext;

pub async fn update_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let (name, event_date) = match (required(body.name), required(body.event_date)) {
        (Some(name), Some(event_date)) => (name, event_date),
        _ => {
            return Err(AppError::BadClientData(
                "name and event_date are required".into(),
            ))
        }
    };

    let usecase = UpdateEventUseCase {
        event_id: path_params.event_id.clone(),
        name,
        description: required(body.description),
        event_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::from(event)))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::InvalidDate(e) => AppError::BadClientData(e.to_string()),
            UseCaseError::NotFound => AppError::NotFound("Event not found".into()),
        })
}

/// Replaces the name, description and date of an event.
/// A date in the past is accepted here.
#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub event_date: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidDate(InvalidDateError),
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let event_date = parse_event_date(&self.event_date).map_err(UseCaseError::InvalidDate)?;

        let mut event = match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        event.name = self.name.clone();
        event.description = self.description.clone();
        event.event_date = event_date;
        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}
