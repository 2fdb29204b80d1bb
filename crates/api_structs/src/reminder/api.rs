use crate::{
    dtos::{ReminderDTO, ReminderWithEventDTO},
    MessageResponse,
};
use event_reminder_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

pub type ReminderResponse = ReminderDTO;

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        ReminderDTO::new(reminder)
    }
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderWithEventDTO>;
}

pub mod get_event_reminders {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = Vec<ReminderWithEventDTO>;
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderWithEventDTO;
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub event_id: Option<ID>,
        #[serde(default)]
        pub recipient_email: Option<String>,
        #[serde(default)]
        pub days_before: Option<i64>,
        /// One of `once`, `daily`, `weekly` or `custom`
        #[serde(default)]
        pub frequency: Option<String>,
        /// Required when `frequency` is `custom`
        #[serde(default)]
        pub custom_frequency_days: Option<i64>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub recipient_email: Option<String>,
        #[serde(default)]
        pub days_before: Option<i64>,
        #[serde(default)]
        pub frequency: Option<String>,
        #[serde(default)]
        pub custom_frequency_days: Option<i64>,
        /// Defaults to `true`
        #[serde(default)]
        pub is_active: Option<bool>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = MessageResponse;
}

pub mod toggle_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}
