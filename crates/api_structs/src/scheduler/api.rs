use crate::dtos::{PreviewDetailDTO, ReminderLogDTO, RunDetailDTO, RunSummaryDTO};
use event_reminder_domain::ReminderLogStats;
use serde::{Deserialize, Serialize};

pub mod run_scheduler {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub summary: RunSummaryDTO,
        pub details: Vec<RunDetailDTO>,
    }
}

pub mod preview_scheduler {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub total_active: i64,
        pub would_send: i64,
        pub would_skip: i64,
        pub details: Vec<PreviewDetailDTO>,
    }
}

pub mod get_history {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        /// Falls back to the configured default when absent or not positive
        pub limit: Option<i64>,
    }

    pub type APIResponse = Vec<ReminderLogDTO>;
}

pub mod get_stats {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
    pub struct APIResponse {
        pub total: i64,
        pub sent: i64,
        pub failed: i64,
    }

    impl From<ReminderLogStats> for APIResponse {
        fn from(stats: ReminderLogStats) -> Self {
            Self {
                total: stats.total,
                sent: stats.sent,
                failed: stats.failed,
            }
        }
    }
}
