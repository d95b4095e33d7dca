use crate::error::TaskcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use taskcal_api_structs::delete_availability::*;
use taskcal_domain::{AvailabilityWindow, ID};
use taskcal_infra::TaskcalContext;

pub async fn delete_availability_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<TaskcalContext>,
) -> Result<HttpResponse, TaskcalError> {
    let path_params = path_params.into_inner();

    let usecase = DeleteAvailabilityUseCase {
        user_id: path_params.user_id,
        project_id: path_params.project_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.window)))
        .map_err(TaskcalError::from)
}

/// Deselect a project: drop its availability window and every slot that
/// was scheduled for it, so the calendar feed stops carrying its events.
#[derive(Debug)]
struct DeleteAvailabilityUseCase {
    pub user_id: ID,
    pub project_id: String,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(String),
    Storage,
}

impl From<UseCaseError> for TaskcalError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(project_id) => Self::NotFound(format!(
                "No availability window found for project: {}",
                project_id
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
impl UseCase for DeleteAvailabilityUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAvailability";

    async fn execute(&mut self, ctx: &TaskcalContext) -> Result<Self::Response, Self::Error> {
        let window = ctx
            .repos
            .availability
            .delete(&self.user_id, &self.project_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.project_id.clone()))?;

        ctx.repos
            .slots
            .delete_by_project(&self.user_id, &self.project_id)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(UseCaseRes { window })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use taskcal_domain::{Reminder, ScheduledSlot, WeekdayFlags};

    #[actix_web::main]
    #[test]
    async fn deselecting_a_project_removes_window_and_slots() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();
        let window = AvailabilityWindow::new(
            user_id.clone(),
            "2203306141".into(),
            "Work".into(),
            9,
            17,
            WeekdayFlags::weekdays(),
        )
        .unwrap();
        ctx.repos.availability.upsert(&window).await.unwrap();

        let reminder = Reminder {
            id: "7032".into(),
            project_id: "2203306141".into(),
            due_date: "2024-01-05".into(),
            priority: 1,
            content: "Task".into(),
            description: String::new(),
        };
        let slot = ScheduledSlot::new(
            user_id.clone(),
            &reminder,
            NaiveDate::from_ymd(2024, 1, 1).and_hms(9, 0, 0),
        );
        ctx.repos.slots.insert(&slot).await.unwrap();

        let usecase = DeleteAvailabilityUseCase {
            user_id: user_id.clone(),
            project_id: "2203306141".into(),
        };
        let res = execute(usecase, &ctx).await;

        assert!(res.is_ok());
        assert!(ctx
            .repos
            .availability
            .find(&user_id, "2203306141")
            .await
            .is_none());
        assert!(ctx.repos.slots.find_by_user(&user_id).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn deleting_unknown_project_is_not_found() {
        let ctx = TaskcalContext::create_inmemory();
        let usecase = DeleteAvailabilityUseCase {
            user_id: ID::new(),
            project_id: "999".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
