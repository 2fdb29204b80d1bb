use actix_web::{web, HttpResponse};
use event_reminder_api_structs::get_service_health::*;
use event_reminder_infra::ReminderContext;
use tracing::error;

async fn health(ctx: web::Data<ReminderContext>) -> HttpResponse {
    match ctx.repos.health.check().await {
        Ok(()) => HttpResponse::Ok().json(APIResponse {
            status: "ok".into(),
            database: "connected".into(),
            timestamp: ctx.sys.now(),
        }),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::InternalServerError().json(APIErrorResponse {
                status: "error".into(),
                database: "disconnected".into(),
                error: e.to_string(),
            })
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
