use crate::{APIResponse, BaseClient, ID};
use event_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    /// One of `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY` or `DD/MM/YY`
    pub event_date: String,
}

/// Replaces the name, description and date of the event
pub struct UpdateEventInput {
    pub event_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub event_date: String,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            user_id: Some(input.user_id),
            name: Some(input.name),
            description: input.description,
            event_date: Some(input.event_date),
        };
        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let body = update_event::RequestBody {
            name: Some(input.name),
            description: input.description,
            event_date: Some(input.event_date),
        };
        self.base
            .put(body, format!("events/{}", input.event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }
}
