mod delete_availability;
mod get_availability;
mod set_availability;

use actix_web::web;
use delete_availability::delete_availability_controller;
use get_availability::get_availability_controller;
use set_availability::set_availability_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/availability",
        web::get().to(get_availability_controller),
    );
    cfg.route(
        "/user/{user_id}/availability/{project_id}",
        web::put().to(set_availability_controller),
    );
    cfg.route(
        "/user/{user_id}/availability/{project_id}",
        web::delete().to(delete_availability_controller),
    );
}
