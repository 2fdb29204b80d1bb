use super::candidates::load_candidates;
use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::{dtos::PreviewDetailDTO, preview_scheduler::*};
use event_reminder_domain::evaluate;
use event_reminder_infra::ReminderContext;

pub async fn preview_scheduler_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    execute(PreviewSchedulerUseCase {}, &ctx)
        .await
        .map(|preview| HttpResponse::Ok().json(preview))
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Evaluates every candidate like a scheduler run would, without sending or
/// persisting anything
#[derive(Debug)]
pub struct PreviewSchedulerUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for PreviewSchedulerUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "PreviewScheduler";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.local_now();
        let candidates = load_candidates(ctx, now.date_naive())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let details = candidates
            .into_iter()
            .map(|c| {
                let decision = evaluate(&c.reminder.snapshot(), c.days_until, &now);
                PreviewDetailDTO {
                    reminder_id: c.reminder.id,
                    event_name: c.event.name,
                    event_date: c.event.event_date,
                    recipient_email: c.reminder.recipient_email,
                    days_until: c.days_until,
                    frequency: c.reminder.frequency.kind().to_string(),
                    would_send: decision.should_send,
                    reason: decision.reason.to_string(),
                    last_sent: c.reminder.last_sent_at,
                }
            })
            .collect::<Vec<_>>();

        let would_send = details.iter().filter(|d| d.would_send).count() as i64;
        let total_active = details.len() as i64;

        Ok(APIResponse {
            total_active,
            would_send,
            would_skip: total_active - would_send,
            details,
        })
    }
}
