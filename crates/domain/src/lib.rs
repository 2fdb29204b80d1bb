mod date;
mod email;
mod event;
mod policy;
mod reminder;
mod reminder_log;
mod shared;
mod user;

pub use chrono_tz::Tz;
pub use date::{days_until, format_date, parse_event_date, InvalidDateError};
pub use email::ReminderEmail;
pub use event::Event;
pub use policy::{evaluate, Decision, Reason, ReminderSnapshot};
pub use reminder::{parse_days_before, InvalidFrequencyError, Reminder, ReminderFrequency, MAX_DAYS};
pub use reminder_log::{DeliveryStatus, InvalidDeliveryStatusError, ReminderLog, ReminderLogStats};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;
