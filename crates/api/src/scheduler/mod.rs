mod candidates;
mod get_history;
mod get_stats;
mod preview_scheduler;
pub mod run_scheduler;

use actix_web::web;
use get_history::get_history_controller;
use get_stats::get_stats_controller;
use preview_scheduler::preview_scheduler_controller;
use run_scheduler::run_scheduler_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/scheduler/run", web::post().to(run_scheduler_controller));
    cfg.route("/scheduler/preview", web::get().to(preview_scheduler_controller));
    cfg.route("/scheduler/history", web::get().to(get_history_controller));
    cfg.route("/scheduler/stats", web::get().to(get_stats_controller));
}
