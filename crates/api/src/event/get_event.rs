use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{
    dtos::{EventDTO, EventDetailsDTO, ReminderDTO},
    get_event::*,
};
use event_reminder_domain::ID;
use event_reminder_infra::ReminderContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(event))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::NotFound => AppError::NotFound("Event not found".into()),
        })
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };
        let user = ctx
            .repos
            .users
            .find(&event.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let reminders = ctx
            .repos
            .reminders
            .find_by_events(&[event.id.clone()])
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let today = ctx.local_now().date_naive();
        Ok(EventDetailsDTO {
            user_name: user.as_ref().map(|u| u.name.clone()),
            user_email: user.map(|u| u.email),
            days_until: event.days_until(today),
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            event: EventDTO::new(event),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::{insert_event, insert_reminder, insert_user, setup_context};
    use chrono::{NaiveDate, TimeZone, Utc};
    use event_reminder_domain::ReminderFrequency;

    #[actix_web::test]
    async fn returns_event_with_reminders_longest_lead_first() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;
        let event = insert_event(&ctx, &user, NaiveDate::from_ymd_opt(2026, 10, 30).unwrap()).await;
        insert_reminder(&ctx, &event, 1, ReminderFrequency::Once, None).await;
        insert_reminder(&ctx, &event, 7, ReminderFrequency::Weekly, None).await;

        let mut usecase = GetEventUseCase {
            event_id: event.id.clone(),
        };
        let details = usecase.execute(&ctx).await.unwrap();
        assert_eq!(details.days_until, 14);
        assert_eq!(details.user_name.as_deref(), Some("Ada"));
        assert_eq!(
            details.reminders.iter().map(|r| r.days_before).collect::<Vec<_>>(),
            vec![7, 1]
        );
    }

    #[actix_web::test]
    async fn get_nonexisting_event() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let mut usecase = GetEventUseCase {
            event_id: Default::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound)
        ));
    }
}
