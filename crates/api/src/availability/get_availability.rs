use crate::error::TaskcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use taskcal_api_structs::get_availability::*;
use taskcal_domain::{AvailabilityWindow, ID};
use taskcal_infra::TaskcalContext;

pub async fn get_availability_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<TaskcalContext>,
) -> Result<HttpResponse, TaskcalError> {
    let usecase = GetAvailabilityUseCase {
        user_id: path_params.into_inner().user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.windows)))
        .map_err(TaskcalError::from)
}

#[derive(Debug)]
struct GetAvailabilityUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
enum UseCaseError {}

impl From<UseCaseError> for TaskcalError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
struct UseCaseRes {
    pub windows: Vec<AvailabilityWindow>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAvailabilityUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAvailability";

    async fn execute(&mut self, ctx: &TaskcalContext) -> Result<Self::Response, Self::Error> {
        let windows = ctx.repos.availability.find_by_user(&self.user_id).await;
        Ok(UseCaseRes { windows })
    }
}
