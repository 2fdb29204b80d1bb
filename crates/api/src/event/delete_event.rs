use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::delete_event::*;
use event_reminder_domain::{Event, ID};
use event_reminder_infra::ReminderContext;

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Event deleted successfully")))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::NotFound => AppError::NotFound("Event not found".into()),
        })
}

/// Deletes the event and its reminders
#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = Event;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(_)) => (),
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        ctx.repos
            .reminders
            .delete_by_events(&[self.event_id.clone()])
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        match ctx.repos.events.delete(&self.event_id).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(UseCaseError::NotFound),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::{insert_event, insert_reminder, insert_user, setup_context};
    use chrono::{NaiveDate, TimeZone, Utc};
    use event_reminder_domain::ReminderFrequency;

    #[actix_web::test]
    async fn deletes_event_with_its_reminders() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;
        let event = insert_event(&ctx, &user, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()).await;
        let reminder = insert_reminder(&ctx, &event, 3, ReminderFrequency::Weekly, None).await;

        let mut usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), event);
        assert!(ctx.repos.reminders.find(&reminder.id).await.unwrap().is_none());
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound)
        ));
    }
}
