use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::get_stats::*;
use event_reminder_domain::ReminderLogStats;
use event_reminder_infra::ReminderContext;

pub async fn get_stats_controller(ctx: web::Data<ReminderContext>) -> Result<HttpResponse, AppError> {
    execute(GetStatsUseCase {}, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::from(stats)))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Counts delivery logs by status
#[derive(Debug)]
pub struct GetStatsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetStatsUseCase {
    type Response = ReminderLogStats;
    type Error = UseCaseError;

    const NAME: &'static str = "GetStats";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminder_logs
            .stats()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
