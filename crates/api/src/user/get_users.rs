use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{dtos::UserDTO, get_users::*};
use event_reminder_domain::User;
use event_reminder_infra::ReminderContext;

pub async fn get_users_controller(ctx: web::Data<ReminderContext>) -> Result<HttpResponse, AppError> {
    execute(GetUsersUseCase {}, &ctx)
        .await
        .map(|users| {
            let res: APIResponse = users.into_iter().map(UserDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetUsersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUsersUseCase {
    type Response = Vec<User>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
