mod helpers;

use chrono::NaiveDate;
use event_reminder_sdk::{
    CreateEventInput, CreateReminderInput, CreateUserInput, ErrorResponse, ReminderSDK,
    UpdateEventInput, UpdateReminderInput, UpdateUserInput, ID,
};
use helpers::setup::spawn_app;
use reqwest::StatusCode;

async fn create_user(sdk: &ReminderSDK, email: &str) -> ID {
    sdk.user
        .create(CreateUserInput {
            name: Some("Ada Lovelace".into()),
            email: Some(email.into()),
        })
        .await
        .expect("Expected to create user")
        .id
}

async fn create_event(sdk: &ReminderSDK, user_id: ID, event_date: &str) -> ID {
    sdk.event
        .create(CreateEventInput {
            user_id,
            name: "Product launch".into(),
            description: Some("Ship it".into()),
            event_date: event_date.into(),
        })
        .await
        .expect("Expected to create event")
        .id
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (sdk, _) = spawn_app().await;
    let health = sdk
        .status
        .check_health()
        .await
        .expect("Expected service to be healthy");
    assert_eq!(health.status, "ok");
    assert_eq!(health.database, "connected");
}

#[actix_web::main]
#[test]
async fn test_unknown_route_is_json_404() {
    let (_, address) = spawn_app().await;
    let res = reqwest::get(format!("{}/nope", address))
        .await
        .expect("Expected a response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res
        .json::<ErrorResponse>()
        .await
        .expect("Expected a JSON error body");
    assert_eq!(body.error, "Route not found");
}

#[actix_web::main]
#[test]
async fn test_crud_user() {
    let (sdk, _) = spawn_app().await;
    let user_id = create_user(&sdk, "ada@example.com").await;

    let user = sdk
        .user
        .get(user_id.clone())
        .await
        .expect("Expected to get user");
    assert_eq!(user.email, "ada@example.com");

    let user = sdk
        .user
        .update(UpdateUserInput {
            user_id: user_id.clone(),
            name: "Ada King".into(),
            email: "ada@example.com".into(),
        })
        .await
        .expect("Expected to update user");
    assert_eq!(user.name, "Ada King");
    assert_eq!(user.email, "ada@example.com");

    let users = sdk.user.list().await.expect("Expected to list users");
    assert_eq!(users.len(), 1);

    sdk.user
        .delete(user_id.clone())
        .await
        .expect("Expected to delete user");

    // Get after deleted should be error
    let err = sdk.user.get(user_id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[actix_web::main]
#[test]
async fn test_user_validation() {
    let (sdk, address) = spawn_app().await;
    create_user(&sdk, "ada@example.com").await;

    let missing_email = sdk
        .user
        .create(CreateUserInput {
            name: Some("Ada".into()),
            email: None,
        })
        .await
        .unwrap_err();
    assert_eq!(missing_email.status(), Some(StatusCode::BAD_REQUEST));

    let duplicate = sdk
        .user
        .create(CreateUserInput {
            name: Some("Other Ada".into()),
            email: Some("ada@example.com".into()),
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate.status(), Some(StatusCode::CONFLICT));

    let malformed_id = reqwest::get(format!("{}/api/users/not-an-id", address))
        .await
        .expect("Expected a response");
    assert_eq!(malformed_id.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_crud_event() {
    let (sdk, _) = spawn_app().await;
    let user_id = create_user(&sdk, "ada@example.com").await;
    let event_id = create_event(&sdk, user_id.clone(), "20/10/2026").await;

    let event = sdk
        .event
        .get(event_id.clone())
        .await
        .expect("Expected to get event");
    assert_eq!(
        event.event.event_date,
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    );
    assert_eq!(event.days_until, 4);
    assert_eq!(event.user_email.as_deref(), Some("ada@example.com"));
    assert!(event.reminders.is_empty());

    let event = sdk
        .event
        .update(UpdateEventInput {
            event_id: event_id.clone(),
            name: "Launch party".into(),
            description: None,
            event_date: "2026-11-01".into(),
        })
        .await
        .expect("Expected to update event");
    assert_eq!(event.name, "Launch party");
    assert_eq!(event.description, None);
    assert_eq!(event.event_date, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());

    let events = sdk.event.list().await.expect("Expected to list events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].days_until, 16);
    assert_eq!(events[0].reminder_count, 0);

    sdk.event
        .delete(event_id.clone())
        .await
        .expect("Expected to delete event");
    let err = sdk.event.get(event_id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[actix_web::main]
#[test]
async fn test_event_validation() {
    let (sdk, _) = spawn_app().await;
    let user_id = create_user(&sdk, "ada@example.com").await;

    for (event_date, status) in [
        ("2026/10/20", StatusCode::BAD_REQUEST),
        ("31/02/2027", StatusCode::BAD_REQUEST),
        ("15/10/2026", StatusCode::BAD_REQUEST),
    ] {
        let err = sdk
            .event
            .create(CreateEventInput {
                user_id: user_id.clone(),
                name: "Launch".into(),
                description: None,
                event_date: event_date.into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(status), "{}", event_date);
    }

    let err = sdk
        .event
        .create(CreateEventInput {
            user_id: ID::default(),
            name: "Launch".into(),
            description: None,
            event_date: "2026-10-20".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    // Today is still accepted
    create_event(&sdk, user_id, "16-10-2026").await;
}

#[actix_web::main]
#[test]
async fn test_crud_reminder() {
    let (sdk, _) = spawn_app().await;
    let user_id = create_user(&sdk, "ada@example.com").await;
    let event_id = create_event(&sdk, user_id, "2026-10-20").await;

    let reminder = sdk
        .reminder
        .create(CreateReminderInput {
            event_id: event_id.clone(),
            recipient_email: "grace@example.com".into(),
            days_before: 3,
            frequency: "custom".into(),
            custom_frequency_days: Some(2),
        })
        .await
        .expect("Expected to create reminder");
    assert_eq!(reminder.frequency, "custom");
    assert_eq!(reminder.custom_frequency_days, Some(2));
    assert!(reminder.is_active);
    assert!(reminder.last_sent_at.is_none());

    let fetched = sdk
        .reminder
        .get(reminder.id.clone())
        .await
        .expect("Expected to get reminder");
    assert_eq!(fetched.event_name.as_deref(), Some("Product launch"));

    let by_event = sdk
        .reminder
        .list_by_event(event_id.clone())
        .await
        .expect("Expected to list event reminders");
    assert_eq!(by_event.len(), 1);
    assert!(sdk
        .reminder
        .list_by_event(ID::default())
        .await
        .expect("Expected an empty list")
        .is_empty());

    let toggled = sdk
        .reminder
        .toggle(reminder.id.clone())
        .await
        .expect("Expected to toggle reminder");
    assert!(!toggled.is_active);

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            recipient_email: "grace@example.com".into(),
            days_before: 1,
            frequency: "daily".into(),
            custom_frequency_days: None,
            is_active: None,
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(updated.days_before, 1);
    assert_eq!(updated.frequency, "daily");
    assert_eq!(updated.custom_frequency_days, None);
    assert_eq!(updated.recipient_email, "grace@example.com");
    assert!(updated.is_active);

    let event = sdk
        .event
        .get(event_id.clone())
        .await
        .expect("Expected to get event");
    assert_eq!(event.reminders.len(), 1);

    sdk.event
        .delete(event_id)
        .await
        .expect("Expected to delete event");
    let err = sdk.reminder.get(reminder.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(sdk
        .reminder
        .list()
        .await
        .expect("Expected to list reminders")
        .is_empty());
}

#[actix_web::main]
#[test]
async fn test_reminder_validation() {
    let (sdk, _) = spawn_app().await;
    let user_id = create_user(&sdk, "ada@example.com").await;
    let event_id = create_event(&sdk, user_id, "2026-10-20").await;

    let cases = vec![
        (-1, "daily", None, StatusCode::BAD_REQUEST),
        (2, "monthly", None, StatusCode::BAD_REQUEST),
        (2, "custom", None, StatusCode::BAD_REQUEST),
        (2, "custom", Some(0), StatusCode::BAD_REQUEST),
        (5, "daily", None, StatusCode::BAD_REQUEST),
    ];
    for (days_before, frequency, custom_frequency_days, status) in cases {
        let err = sdk
            .reminder
            .create(CreateReminderInput {
                event_id: event_id.clone(),
                recipient_email: "grace@example.com".into(),
                days_before,
                frequency: frequency.into(),
                custom_frequency_days,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(status), "{} {}", days_before, frequency);
    }

    let err = sdk
        .reminder
        .create(CreateReminderInput {
            event_id: ID::default(),
            recipient_email: "grace@example.com".into(),
            days_before: 1,
            frequency: "once".into(),
            custom_frequency_days: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    // The lead time may equal the days left until the event
    assert!(sdk
        .reminder
        .create(CreateReminderInput {
            event_id,
            recipient_email: "grace@example.com".into(),
            days_before: 4,
            frequency: "once".into(),
            custom_frequency_days: None,
        })
        .await
        .is_ok());
}
