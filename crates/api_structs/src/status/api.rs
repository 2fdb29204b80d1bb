use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        pub database: String,
        pub timestamp: DateTime<Utc>,
    }

    /// Returned with status 500 when the storage backend cannot be reached
    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIErrorResponse {
        pub status: String,
        pub database: String,
        pub error: String,
    }
}
