mod event;
mod reminder;
mod scheduler;
mod status;
mod user;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::scheduler::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::event::api::*;
pub use crate::reminder::api::*;
pub use crate::scheduler::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;

use serde::{Deserialize, Serialize};

/// Body returned by delete endpoints
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
