mod base;
mod event;
mod reminder;
mod scheduler;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::EventClient;
pub use event::{CreateEventInput, UpdateEventInput};
pub use event_reminder_api_structs::dtos::*;
pub use event_reminder_api_structs::{ErrorResponse, MessageResponse};
pub use event_reminder_domain::ID;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use scheduler::SchedulerClient;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateUserInput};

// Domain
pub use event_reminder_api_structs::dtos::EventDTO as Event;
pub use event_reminder_api_structs::dtos::ReminderDTO as Reminder;
pub use event_reminder_api_structs::dtos::UserDTO as User;

/// Event Reminder Server SDK
///
/// The SDK contains methods for interacting with the Event Reminder server
/// API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub event: EventClient,
    pub reminder: ReminderClient,
    pub scheduler: SchedulerClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl ReminderSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = EventClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let scheduler = SchedulerClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            event,
            reminder,
            scheduler,
            status,
            user,
        }
    }
}
