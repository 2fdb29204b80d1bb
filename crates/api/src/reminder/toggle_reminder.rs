use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::toggle_reminder::*;
use event_reminder_domain::{Reminder, ID};
use event_reminder_infra::ReminderContext;

pub async fn toggle_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = ToggleReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::from(reminder)))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::NotFound => AppError::NotFound("Reminder not found".into()),
        })
}

/// Activates an inactive reminder and deactivates an active one
#[derive(Debug)]
pub struct ToggleReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ToggleReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "ToggleReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.toggle_active(&self.reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
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
    async fn toggles_back_and_forth() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;
        let event = insert_event(&ctx, &user, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()).await;
        let reminder = insert_reminder(&ctx, &event, 3, ReminderFrequency::Once, None).await;

        let mut usecase = ToggleReminderUseCase {
            reminder_id: reminder.id.clone(),
        };
        assert!(!usecase.execute(&ctx).await.unwrap().is_active);
        assert!(usecase.execute(&ctx).await.unwrap().is_active);

        let mut usecase = ToggleReminderUseCase {
            reminder_id: Default::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound)
        ));
    }
}
