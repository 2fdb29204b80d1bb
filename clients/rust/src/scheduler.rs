use crate::{APIResponse, BaseClient};
use event_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SchedulerClient {
    base: Arc<BaseClient>,
}

impl SchedulerClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Sends every reminder that is due right now
    pub async fn run(&self) -> APIResponse<run_scheduler::APIResponse> {
        self.base
            .post((), "scheduler/run".into(), StatusCode::OK)
            .await
    }

    /// What `run` would do right now, without sending anything
    pub async fn preview(&self) -> APIResponse<preview_scheduler::APIResponse> {
        self.base
            .get("scheduler/preview".into(), StatusCode::OK)
            .await
    }

    pub async fn history(&self, limit: Option<i64>) -> APIResponse<get_history::APIResponse> {
        let path = match limit {
            Some(limit) => format!("scheduler/history?limit={}", limit),
            None => "scheduler/history".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn stats(&self) -> APIResponse<get_stats::APIResponse> {
        self.base
            .get("scheduler/stats".into(), StatusCode::OK)
            .await
    }
}
