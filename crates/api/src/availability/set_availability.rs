use crate::error::TaskcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use taskcal_api_structs::set_availability::*;
use taskcal_domain::{AvailabilityWindow, WeekdayFlags, ID};
use taskcal_infra::TaskcalContext;

pub async fn set_availability_controller(
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<TaskcalContext>,
) -> Result<HttpResponse, TaskcalError> {
    let path_params = path_params.into_inner();
    let body = body_params.0;

    let usecase = SetAvailabilityUseCase {
        user_id: path_params.user_id,
        project_id: path_params.project_id,
        name: body.name,
        start_hour: body.start_hour,
        end_hour: body.end_hour,
        days: body.days,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.window)))
        .map_err(TaskcalError::from)
}

/// Select a project (or edit its options): store the whole availability
/// window as one replacement record.
#[derive(Debug)]
struct SetAvailabilityUseCase {
    pub user_id: ID,
    pub project_id: String,
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub days: [bool; 7],
}

#[derive(Debug)]
enum UseCaseError {
    InvalidWindow(String),
    Storage,
}

impl From<UseCaseError> for TaskcalError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidWindow(msg) => Self::BadClientData(format!(
                "Invalid availability window: {}. Hours must satisfy 0 <= start < end <= 24.",
                msg
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[derive(Debug)]
struct UseCaseRes {
    pub window: AvailabilityWindow,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAvailabilityUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SetAvailability";

    async fn execute(&mut self, ctx: &TaskcalContext) -> Result<Self::Response, Self::Error> {
        let window = AvailabilityWindow::new(
            self.user_id.clone(),
            self.project_id.clone(),
            self.name.clone(),
            self.start_hour,
            self.end_hour,
            WeekdayFlags(self.days),
        )
        .map_err(|e| UseCaseError::InvalidWindow(e.to_string()))?;

        match ctx.repos.availability.upsert(&window).await {
            Ok(_) => Ok(UseCaseRes { window }),
            Err(_) => Err(UseCaseError::Storage),
        }
    }
}
