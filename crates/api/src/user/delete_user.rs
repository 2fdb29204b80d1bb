use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::delete_user::*;
use event_reminder_domain::{User, ID};
use event_reminder_infra::ReminderContext;

pub async fn delete_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = DeleteUserUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("User deleted successfully")))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
            UseCaseError::NotFound => AppError::NotFound("User not found".into()),
        })
}

/// Deletes the user together with their events and the reminders of those events
#[derive(Debug)]
pub struct DeleteUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(_)) => (),
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        let event_ids = ctx
            .repos
            .events
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|e| e.id)
            .collect::<Vec<_>>();
        ctx.repos
            .reminders
            .delete_by_events(&event_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .events
            .delete_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        match ctx.repos.users.delete(&self.user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(UseCaseError::NotFound),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
