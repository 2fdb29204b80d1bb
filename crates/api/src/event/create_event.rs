use crate::error::AppError;
use crate::shared::{
    extractors::required,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::create_event::*;
use event_reminder_domain::{parse_event_date, Event, InvalidDateError, ID};
use event_reminder_infra::ReminderContext;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let (user_id, name, event_date) =
        match (body.user_id, required(body.name), required(body.event_date)) {
            (Some(user_id), Some(name), Some(event_date)) => (user_id, name, event_date),
            _ => {
                return Err(AppError::BadClientData(
                    "user_id, name and event_date are required".into(),
                ))
            }
        };

    let usecase = CreateEventUseCase {
        user_id,
        name,
        description: required(body.description),
        event_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::from(event)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    /// Unparsed date as given by the client
    pub event_date: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidDate(InvalidDateError),
    DateInThePast,
    UserNotFound,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidDate(e) => Self::BadClientData(e.to_string()),
            UseCaseError::DateInThePast => {
                Self::BadClientData("The event date cannot be in the past".into())
            }
            UseCaseError::UserNotFound => Self::NotFound("User not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let event_date = parse_event_date(&self.event_date).map_err(UseCaseError::InvalidDate)?;
        let today = ctx.local_now().date_naive();
        if event_date < today {
            return Err(UseCaseError::DateInThePast);
        }

        match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(_)) => (),
            Ok(None) => return Err(UseCaseError::UserNotFound),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        let event = Event {
            id: Default::default(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            event_date,
            created: ctx.sys.now(),
        };
        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::{insert_user, setup_context};
    use chrono::{NaiveDate, TimeZone, Utc};
    use event_reminder_domain::User;

    struct TestContext {
        ctx: ReminderContext,
        user: User,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let user = insert_user(&ctx, "ada@example.com").await;
        TestContext { ctx, user }
    }

    fn usecase(user: &User, event_date: &str) -> CreateEventUseCase {
        CreateEventUseCase {
            user_id: user.id.clone(),
            name: "Launch".into(),
            description: None,
            event_date: event_date.into(),
        }
    }

    #[actix_web::test]
    async fn creates_event_in_any_accepted_format() {
        let TestContext { ctx, user } = setup().await;

        for datestr in ["2026-11-05", "05-11-2026", "05/11/2026", "05/11/26"] {
            let event = usecase(&user, datestr).execute(&ctx).await.unwrap();
            assert_eq!(event.event_date, NaiveDate::from_ymd_opt(2026, 11, 5).unwrap());
        }
    }

    #[actix_web::test]
    async fn accepts_today_and_rejects_the_past() {
        let TestContext { ctx, user } = setup().await;

        assert!(usecase(&user, "2026-10-16").execute(&ctx).await.is_ok());
        assert!(matches!(
            usecase(&user, "2026-10-15").execute(&ctx).await,
            Err(UseCaseError::DateInThePast)
        ));
    }

    #[actix_web::test]
    async fn rejects_invalid_date() {
        let TestContext { ctx, user } = setup().await;

        assert!(matches!(
            usecase(&user, "next friday").execute(&ctx).await,
            Err(UseCaseError::InvalidDate(_))
        ));
    }

    #[actix_web::test]
    async fn rejects_unknown_user() {
        let TestContext { ctx, .. } = setup().await;
        let stranger = User::new("Nobody".into(), "nobody@example.com".into(), ctx.sys.now());

        assert!(matches!(
            usecase(&stranger, "2026-11-05").execute(&ctx).await,
            Err(UseCaseError::UserNotFound)
        ));
    }
}
