use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{dtos::ReminderLogDTO, get_history::*};
use event_reminder_infra::ReminderContext;
use std::collections::HashMap;

pub async fn get_history_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetHistoryUseCase {
        limit: query_params
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(ctx.config.history_default_limit),
    };

    execute(usecase, &ctx)
        .await
        .map(|history| HttpResponse::Ok().json(history))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// The latest delivery logs, each with the current settings of its reminder
#[derive(Debug)]
pub struct GetHistoryUseCase {
    pub limit: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHistoryUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetHistory";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let logs = ctx
            .repos
            .reminder_logs
            .find_recent(self.limit)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let reminder_ids = logs
            .iter()
            .filter_map(|l| l.reminder_id.clone())
            .collect::<Vec<_>>();
        let reminders = ctx
            .repos
            .reminders
            .find_many(&reminder_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect::<HashMap<_, _>>();

        Ok(logs
            .into_iter()
            .map(|log| {
                let reminder = log.reminder_id.as_ref().and_then(|id| reminders.get(id));
                let frequency = reminder.map(|r| r.frequency.kind().to_string());
                let days_before = reminder.map(|r| r.days_before);
                ReminderLogDTO::new(log, frequency, days_before)
            })
            .collect())
    }
}
