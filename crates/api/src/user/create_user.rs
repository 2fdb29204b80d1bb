use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::create_user::*;
use event_reminder_domain::User;
use event_reminder_infra::ReminderContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let (name, email) = match (required(body.name), required(body.email)) {
        (Some(name), Some(email)) => (name, email),
        _ => {
            return Err(AppError::BadClientData(
                "Name and email are required".into(),
            ))
        }
    };

    let usecase = CreateUserUseCase { name, email };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::from(user)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    EmailAlreadyInUse,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::EmailAlreadyInUse => {
                Self::Conflict("This email is already in use".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.users.find_by_email(&self.email).await {
            Ok(Some(_)) => return Err(UseCaseError::EmailAlreadyInUse),
            Ok(None) => (),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        let user = User::new(self.name.clone(), self.email.clone(), ctx.sys.now());
        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}
