use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::update_user::*;
use event_reminder_domain::{User, ID};
use event_reminder_infra::ReminderContext;

pub async fn update_user_controller(
    path_params: web::Path<PathParams>,
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

    let usecase = UpdateUserUseCase {
        user_id: path_params.user_id.clone(),
        name,
        email,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::from(user)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct UpdateUserUseCase {
    pub user_id: ID,
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound,
    EmailAlreadyInUse,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound => Self::NotFound("User not found".into()),
            UseCaseError::EmailAlreadyInUse => {
                Self::Conflict("This email is already in use".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateUser";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let mut user = match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        match ctx.repos.users.find_by_email(&self.email).await {
            Ok(Some(other)) if other.id != user.id => {
                return Err(UseCaseError::EmailAlreadyInUse)
            }
            Ok(_) => (),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        user.name = self.name.clone();
        user.email = self.email.clone();
        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::{insert_user, setup_context};
    use chrono::{TimeZone, Utc};

    #[actix_web::test]
    async fn updates_user_and_keeps_own_email() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;

        let mut usecase = UpdateUserUseCase {
            user_id: user.id.clone(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.created, user.created);
    }

    #[actix_web::test]
    async fn rejects_email_of_another_user() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;
        insert_user(&ctx, "grace@example.com").await;

        let mut usecase = UpdateUserUseCase {
            user_id: user.id.clone(),
            name: "Ada".into(),
            email: "grace@example.com".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::EmailAlreadyInUse)
        ));
    }

    #[actix_web::test]
    async fn update_nonexisting_user() {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let mut usecase = UpdateUserUseCase {
            user_id: Default::default(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound)
        ));
    }
}
