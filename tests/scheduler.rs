mod helpers;

use event_reminder_sdk::{
    CreateEventInput, CreateReminderInput, CreateUserInput, ReminderSDK, RunSummaryDTO, ID,
};
use helpers::setup::{frozen_now, spawn_app};

async fn create_reminder(
    sdk: &ReminderSDK,
    event_id: &ID,
    days_before: i64,
    frequency: &str,
    custom_frequency_days: Option<i64>,
) -> ID {
    sdk.reminder
        .create(CreateReminderInput {
            event_id: event_id.clone(),
            recipient_email: "grace@example.com".into(),
            days_before,
            frequency: frequency.into(),
            custom_frequency_days,
        })
        .await
        .expect("Expected to create reminder")
        .id
}

/// An event four days after the frozen clock with one reminder of each kind
async fn setup_reminders(sdk: &ReminderSDK) -> (ID, ID) {
    let user = sdk
        .user
        .create(CreateUserInput {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
        })
        .await
        .expect("Expected to create user");
    let event = sdk
        .event
        .create(CreateEventInput {
            user_id: user.id,
            name: "Product launch".into(),
            description: None,
            event_date: "2026-10-20".into(),
        })
        .await
        .expect("Expected to create event");

    create_reminder(sdk, &event.id, 4, "daily", None).await;
    let once = create_reminder(sdk, &event.id, 4, "once", None).await;
    // Window opens two days before the event, so it is skipped today
    create_reminder(sdk, &event.id, 2, "weekly", None).await;
    create_reminder(sdk, &event.id, 4, "custom", Some(3)).await;
    let inactive = create_reminder(sdk, &event.id, 3, "daily", None).await;
    sdk.reminder
        .toggle(inactive)
        .await
        .expect("Expected to toggle reminder");

    (event.id, once)
}

#[actix_web::main]
#[test]
async fn test_preview_matches_run() {
    let (sdk, _) = spawn_app().await;
    setup_reminders(&sdk).await;

    let preview = sdk
        .scheduler
        .preview()
        .await
        .expect("Expected to preview scheduler");
    assert_eq!(preview.total_active, 4);
    assert_eq!(preview.would_send, 3);
    assert_eq!(preview.would_skip, 1);

    let run = sdk.scheduler.run().await.expect("Expected to run scheduler");
    assert!(run.success);
    assert_eq!(
        run.summary,
        RunSummaryDTO {
            checked: 4,
            sent: 3,
            skipped: 1,
            errors: 0,
        }
    );
    for detail in &run.details {
        let previewed = preview
            .details
            .iter()
            .find(|p| p.reminder_id == detail.reminder_id)
            .expect("Expected the reminder in the preview");
        assert_eq!(previewed.would_send, detail.sent);
        assert_eq!(previewed.reason, detail.reason);
    }
}

#[actix_web::main]
#[test]
async fn test_second_run_on_the_same_day_sends_nothing() {
    let (sdk, _) = spawn_app().await;
    let (_, once) = setup_reminders(&sdk).await;

    sdk.scheduler.run().await.expect("Expected to run scheduler");
    let reminder = sdk
        .reminder
        .get(once)
        .await
        .expect("Expected to get reminder");
    assert_eq!(reminder.reminder.last_sent_at, Some(frozen_now()));

    let run = sdk.scheduler.run().await.expect("Expected to run scheduler");
    assert_eq!(run.summary.sent, 0);
    assert_eq!(run.summary.skipped, 4);
    assert!(run.details.iter().all(|d| d.status == "skipped"));
}

#[actix_web::main]
#[test]
async fn test_history_and_stats() {
    let (sdk, _) = spawn_app().await;
    setup_reminders(&sdk).await;

    let stats = sdk.scheduler.stats().await.expect("Expected stats");
    assert_eq!(stats.total, 0);

    sdk.scheduler.run().await.expect("Expected to run scheduler");

    let history = sdk
        .scheduler
        .history(None)
        .await
        .expect("Expected history");
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|log| log.status == "sent"));
    assert!(history
        .iter()
        .all(|log| log.event_name == "Product launch" && log.frequency.is_some()));

    let history = sdk
        .scheduler
        .history(Some(2))
        .await
        .expect("Expected history");
    assert_eq!(history.len(), 2);
    let history = sdk
        .scheduler
        .history(Some(0))
        .await
        .expect("Expected history");
    assert_eq!(history.len(), 3);

    let stats = sdk.scheduler.stats().await.expect("Expected stats");
    assert_eq!(stats.total, 3);
    assert_eq!(stats.sent, 3);
    assert_eq!(stats.failed, 0);
}

#[actix_web::main]
#[test]
async fn test_deleted_reminder_keeps_its_logs() {
    let (sdk, _) = spawn_app().await;
    let (event_id, _) = setup_reminders(&sdk).await;

    sdk.scheduler.run().await.expect("Expected to run scheduler");
    sdk.event
        .delete(event_id)
        .await
        .expect("Expected to delete event");

    let history = sdk
        .scheduler
        .history(None)
        .await
        .expect("Expected history");
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|log| log.frequency.is_none()));
}
