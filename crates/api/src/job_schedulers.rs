use crate::{scheduler::run_scheduler::RunSchedulerUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval_at, Instant};
use event_reminder_infra::ReminderContext;
use std::time::Duration;
use tracing::info;

/// Runs the scheduler every `period`, starting one period from now
pub fn start_scheduler_job(ctx: ReminderContext, period: Duration) {
    info!("Background scheduler runs every {} seconds", period.as_secs());
    actix_web::rt::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;

            if let Ok(res) = execute(RunSchedulerUseCase {}, &ctx).await {
                info!(
                    "Background scheduler run sent {} reminder(s) with {} error(s)",
                    res.summary.sent, res.summary.errors
                );
            }
        }
    });
}
