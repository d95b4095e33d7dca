use crate::error::TaskcalError;
use crate::shared::usecase::UseCase;
use std::collections::{HashMap, HashSet};
use taskcal_domain::{
    assign_slots, sort_reminders, ScheduledSlot, SchedulingProblem, ID,
};
use taskcal_infra::TaskcalContext;
use thiserror::Error;
use tracing::warn;

/// The daily scheduling pass: claim the run gate, pull the pending tasks
/// of every selected project, order them, assign slots and persist them.
///
/// Failures along the way (one project's fetch, one reminder's window or
/// persistence) are collected and reported, they never abort the rest of
/// the pass.
#[derive(Debug)]
pub(crate) struct ScheduleTasksUseCase {
    pub user_id: ID,
    pub api_token: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum RunProblem {
    #[error(transparent)]
    Scheduling(#[from] SchedulingProblem),
    #[error("Fetching tasks for project: {project_id} failed")]
    TaskFetch { project_id: String },
    #[error("Persisting the slot for reminder: {reminder_id} failed")]
    SlotPersistence { reminder_id: String },
}

#[derive(Debug)]
pub(crate) enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for TaskcalError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UseCaseRes {
    /// False when the once-per-day gate decided today's pass already ran
    pub ran: bool,
    pub slots: Vec<ScheduledSlot>,
    pub problems: Vec<RunProblem>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleTasksUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleTasks";

    async fn execute(&mut self, ctx: &TaskcalContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today();
        let claimed = ctx
            .repos
            .run_markers
            .try_claim(&self.user_id, today)
            .await
            .map_err(|_| UseCaseError::Storage)?;
        if !claimed {
            return Ok(UseCaseRes {
                ran: false,
                slots: Vec::new(),
                problems: Vec::new(),
            });
        }

        let windows = ctx.repos.availability.find_by_user(&self.user_id).await;

        let mut problems = Vec::new();
        let mut reminders = Vec::new();
        for window in &windows {
            match ctx
                .task_source
                .fetch_tasks(&self.api_token, &window.project_id)
                .await
            {
                Ok(tasks) => reminders.extend(tasks),
                Err(e) => {
                    warn!(
                        "Task fetch for project: {} failed: {:?}, project skipped this run",
                        window.project_id, e
                    );
                    problems.push(RunProblem::TaskFetch {
                        project_id: window.project_id.clone(),
                    });
                }
            }
        }
        sort_reminders(&mut reminders);

        let windows: HashMap<_, _> = windows
            .into_iter()
            .map(|w| (w.project_id.clone(), w))
            .collect();
        let busy: HashSet<_> = ctx
            .repos
            .slots
            .find_reserved_starts(&self.user_id)
            .await
            .into_iter()
            .collect();

        let plan = assign_slots(
            &self.user_id,
            &reminders,
            &windows,
            &busy,
            ctx.sys.local_datetime(),
            ctx.config.schedule_horizon_days,
        );
        problems.extend(plan.problems.into_iter().map(RunProblem::from));

        let mut slots = Vec::new();
        for assignment in plan.assignments {
            let slot = assignment.slot;
            // Replace-on-reschedule: drop the stale row before inserting
            let persisted = match ctx.repos.slots.delete_by_reminder(&slot.reminder_id).await {
                Ok(_) => ctx.repos.slots.insert(&slot).await,
                Err(e) => Err(e),
            };
            match persisted {
                Ok(_) => slots.push(slot),
                Err(e) => {
                    warn!(
                        "Persisting slot for reminder: {} failed: {:?}",
                        slot.reminder_id, e
                    );
                    problems.push(RunProblem::SlotPersistence {
                        reminder_id: slot.reminder_id.clone(),
                    });
                }
            }
        }

        Ok(UseCaseRes {
            ran: true,
            slots,
            problems,
        })
    }
}
