use crate::{
    dtos::{EventDTO, EventDetailsDTO, EventOverviewDTO},
    MessageResponse,
};
use event_reminder_domain::{Event, ID};
use serde::{Deserialize, Serialize};

pub type EventResponse = EventDTO;

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventDTO::new(event)
    }
}

pub mod get_events {
    use super::*;

    pub type APIResponse = Vec<EventOverviewDTO>;
}

pub mod get_event {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventDetailsDTO;
}

pub mod create_event {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub user_id: Option<ID>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        /// One of `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY` or `DD/MM/YY`
        #[serde(default)]
        pub event_date: Option<String>,
    }

    pub type APIResponse = EventResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub event_date: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = MessageResponse;
}
