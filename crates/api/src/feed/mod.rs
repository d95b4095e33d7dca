mod get_calendar_feed;
mod ical;
mod run_schedule;
mod schedule_tasks;

use actix_web::web;
use get_calendar_feed::get_calendar_feed_controller;
use run_schedule::run_schedule_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/calendar/{api_token}/{user_id}/{project_id}",
        web::get().to(get_calendar_feed_controller),
    );
    cfg.route(
        "/user/{user_id}/schedule/run",
        web::post().to(run_schedule_controller),
    );
}
