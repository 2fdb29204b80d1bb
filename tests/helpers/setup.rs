use chrono::{DateTime, TimeZone, Utc};
use event_reminder_api::Application;
use event_reminder_domain::Tz;
use event_reminder_infra::{Config, ReminderContext, StaticTimeSys};
use event_reminder_sdk::ReminderSDK;
use std::sync::Arc;

/// The instant the server clock is frozen at in tests
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
}

// Launch the application as a background task
pub async fn spawn_app() -> (ReminderSDK, String) {
    let config = Config {
        port: 0, // Random port
        database_url: None,
        timezone: Tz::UTC,
        scheduler_interval_secs: None,
        history_default_limit: 50,
    };
    let mut ctx = ReminderContext::create_inmemory(config);
    ctx.sys = Arc::new(StaticTimeSys(frozen_now()));

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ReminderSDK::new(address.clone());
    (sdk, address)
}
