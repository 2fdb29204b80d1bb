use crate::{APIResponse, BaseClient, ID};
use event_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub event_id: ID,
    pub recipient_email: String,
    pub days_before: i64,
    /// One of `once`, `daily`, `weekly` or `custom`
    pub frequency: String,
    pub custom_frequency_days: Option<i64>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub recipient_email: String,
    pub days_before: i64,
    pub frequency: String,
    pub custom_frequency_days: Option<i64>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn list_by_event(
        &self,
        event_id: ID,
    ) -> APIResponse<get_event_reminders::APIResponse> {
        self.base
            .get(format!("reminders/event/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            event_id: Some(input.event_id),
            recipient_email: Some(input.recipient_email),
            days_before: Some(input.days_before),
            frequency: Some(input.frequency),
            custom_frequency_days: input.custom_frequency_days,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            recipient_email: Some(input.recipient_email),
            days_before: Some(input.days_before),
            frequency: Some(input.frequency),
            custom_frequency_days: input.custom_frequency_days,
            is_active: input.is_active,
        };
        self.base
            .put(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn toggle(&self, reminder_id: ID) -> APIResponse<toggle_reminder::APIResponse> {
        self.base
            .patch(format!("reminders/{}/toggle", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
