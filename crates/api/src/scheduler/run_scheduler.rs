use super::candidates::load_candidates;
use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use event_reminder_api_structs::{
    dtos::{RunDetailDTO, RunSummaryDTO},
    run_scheduler::*,
};
use event_reminder_domain::{evaluate, ReminderEmail};
use event_reminder_infra::ReminderContext;
use tracing::{error, info, warn};

pub async fn run_scheduler_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    execute(RunSchedulerUseCase {}, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                message: "Scheduler run completed".into(),
                summary: res.summary,
                details: res.details,
            })
        })
        .map_err(|e| match e {
            UseCaseError::StorageError => AppError::InternalError,
        })
}

/// Sends every due reminder and records the send on the reminder.
/// A failed send is reported and does not stop the run.
#[derive(Debug)]
pub struct RunSchedulerUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub summary: RunSummaryDTO,
    pub details: Vec<RunDetailDTO>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

enum Outcome {
    Sent,
    Skipped,
    Error(String),
}

impl Outcome {
    fn status(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Skipped => "skipped",
            Self::Error(_) => "error",
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RunSchedulerUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "RunScheduler";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let _run = ctx.scheduler_lock.lock().await;

        let now = ctx.local_now();
        let candidates = load_candidates(ctx, now.date_naive())
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!("{} active reminder(s) to check", candidates.len());

        let mut summary = RunSummaryDTO {
            checked: candidates.len() as i64,
            ..Default::default()
        };
        let mut details = Vec::with_capacity(candidates.len());

        for c in candidates {
            let decision = evaluate(&c.reminder.snapshot(), c.days_until, &now);

            let outcome = if !decision.should_send {
                Outcome::Skipped
            } else {
                let email = ReminderEmail {
                    reminder_id: c.reminder.id.clone(),
                    to: c.reminder.recipient_email.clone(),
                    event_name: c.event.name.clone(),
                    event_date: c.event.event_date,
                    event_description: c.event.description.clone(),
                    days_until: c.days_until,
                };
                let sent_at = now.with_timezone(&Utc);

                match ctx.notifier.send_reminder(&email, sent_at).await {
                    Err(e) => {
                        error!(
                            "Unable to send reminder: {} for event: {}. Error: {:?}",
                            c.reminder.id, c.event.name, e
                        );
                        Outcome::Error(e.to_string())
                    }
                    Ok(()) => match ctx
                        .repos
                        .reminders
                        .mark_sent(&c.reminder.id, c.reminder.last_sent_at, sent_at)
                        .await
                    {
                        Ok(true) => {
                            info!(
                                "Reminder sent for: {} -> {}",
                                c.event.name, c.reminder.recipient_email
                            );
                            Outcome::Sent
                        }
                        Ok(false) => {
                            warn!(
                                "Reminder: {} was sent but another run recorded a send first, the recipient may have received it twice",
                                c.reminder.id
                            );
                            Outcome::Sent
                        }
                        Err(e) => {
                            error!(
                                "Reminder: {} was sent but recording the send failed. Error: {:?}",
                                c.reminder.id, e
                            );
                            Outcome::Error(e.to_string())
                        }
                    },
                }
            };

            match outcome {
                Outcome::Sent => summary.sent += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Error(_) => summary.errors += 1,
            }
            details.push(RunDetailDTO {
                reminder_id: c.reminder.id,
                event_name: c.event.name,
                recipient_email: c.reminder.recipient_email,
                days_until: c.days_until,
                frequency: c.reminder.frequency.kind().to_string(),
                reason: decision.reason.to_string(),
                sent: decision.should_send,
                status: outcome.status().to_string(),
                error: match outcome {
                    Outcome::Error(e) => Some(e),
                    _ => None,
                },
            });
        }

        info!(
            "Scheduler run summary. Checked: {}, sent: {}, skipped: {}, errors: {}",
            summary.checked, summary.sent, summary.skipped, summary.errors
        );

        Ok(UseCaseRes { summary, details })
    }
}
