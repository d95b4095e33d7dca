use super::schedule_tasks::ScheduleTasksUseCase;
use crate::error::TaskcalError;
use crate::shared::usecase::execute;
use actix_web::{web, HttpResponse};
use taskcal_api_structs::run_schedule::*;
use taskcal_infra::TaskcalContext;

/// Trigger the scheduling pass directly and get the outcome as JSON:
/// whether the gate let it run, the slots written, and every problem
/// collected along the way. The calendar feed only logs these.
pub async fn run_schedule_controller(
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<TaskcalContext>,
) -> Result<HttpResponse, TaskcalError> {
    let usecase = ScheduleTasksUseCase {
        user_id: path_params.into_inner().user_id,
        api_token: body_params.0.api_token,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let problems = res.problems.iter().map(|p| p.to_string()).collect();
            HttpResponse::Ok().json(APIResponse::new(res.ran, res.slots, problems))
        })
        .map_err(TaskcalError::from)
}
