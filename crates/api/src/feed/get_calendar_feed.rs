use super::ical::render_calendar;
use super::schedule_tasks::ScheduleTasksUseCase;
use crate::error::TaskcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use taskcal_api_structs::get_calendar_feed::*;
use taskcal_domain::{ScheduledSlot, ID};
use taskcal_infra::TaskcalContext;
use tracing::warn;

pub async fn get_calendar_feed_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<TaskcalContext>,
) -> Result<HttpResponse, TaskcalError> {
    let path_params = path_params.into_inner();

    // Requesting the feed is what triggers the (at most once per day)
    // scheduling pass, exactly like the original calendar download page.
    let run = execute(
        ScheduleTasksUseCase {
            user_id: path_params.user_id.clone(),
            api_token: path_params.api_token,
        },
        &ctx,
    )
    .await
    .map_err(TaskcalError::from)?;
    for problem in &run.problems {
        warn!("Scheduling problem during feed request: {}", problem);
    }

    let usecase = GetCalendarFeedUseCase {
        user_id: path_params.user_id,
        project_id: path_params.project_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let ics = render_calendar(
                &format!("{} Calendar", res.calendar_name),
                &res.slots,
                ctx.sys.local_datetime(),
            );
            HttpResponse::Ok()
                .content_type("text/calendar; charset=utf-8")
                .body(ics)
        })
        .map_err(TaskcalError::from)
}

#[derive(Debug)]
struct GetCalendarFeedUseCase {
    pub user_id: ID,
    pub project_id: String,
}

#[derive(Debug)]
enum UseCaseError {
    ProjectNotSelected(String),
}

impl From<UseCaseError> for TaskcalError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProjectNotSelected(project_id) => Self::NotFound(format!(
                "The project with id: {}, has no calendar configured.",
                project_id
            )),
        }
    }
}

#[derive(Debug)]
struct UseCaseRes {
    pub calendar_name: String,
    pub slots: Vec<ScheduledSlot>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarFeedUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendarFeed";

    async fn execute(&mut self, ctx: &TaskcalContext) -> Result<Self::Response, Self::Error> {
        let window = ctx
            .repos
            .availability
            .find(&self.user_id, &self.project_id)
            .await
            .ok_or_else(|| UseCaseError::ProjectNotSelected(self.project_id.clone()))?;

        let slots = ctx
            .repos
            .slots
            .find_by_project(&self.user_id, &self.project_id)
            .await;

        Ok(UseCaseRes {
            calendar_name: window.name,
            slots,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use taskcal_domain::{AvailabilityWindow, Reminder, WeekdayFlags};

    #[actix_web::main]
    #[test]
    async fn feed_for_unselected_project_is_not_found() {
        let ctx = TaskcalContext::create_inmemory();
        let usecase = GetCalendarFeedUseCase {
            user_id: ID::new(),
            project_id: "999".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::ProjectNotSelected(_))));
    }

    #[actix_web::main]
    #[test]
    async fn feed_carries_only_the_projects_slots() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();
        let window = AvailabilityWindow::new(
            user_id.clone(),
            "p1".into(),
            "Work".into(),
            9,
            17,
            WeekdayFlags::weekdays(),
        )
        .unwrap();
        ctx.repos.availability.upsert(&window).await.unwrap();

        for (id, project_id, hour) in &[("1", "p1", 9), ("2", "p2", 10)] {
            let reminder = Reminder {
                id: (*id).into(),
                project_id: (*project_id).into(),
                due_date: "2024-01-05".into(),
                priority: 1,
                content: format!("Task {}", id),
                description: String::new(),
            };
            let slot = ScheduledSlot::new(
                user_id.clone(),
                &reminder,
                NaiveDate::from_ymd(2024, 1, 1).and_hms(*hour, 0, 0),
            );
            ctx.repos.slots.insert(&slot).await.unwrap();
        }

        let usecase = GetCalendarFeedUseCase {
            user_id,
            project_id: "p1".into(),
        };
        let res = execute(usecase, &ctx).await.expect("To build feed");

        assert_eq!(res.calendar_name, "Work");
        assert_eq!(res.slots.len(), 1);
        assert_eq!(res.slots[0].reminder_id, "1");
    }
}
