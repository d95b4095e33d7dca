//! Greedy earliest-fit slot assignment.
//!
//! Every reminder is scanned forward from the shared run start time, one
//! hour at a time, until an hour is found that is inside the project's
//! availability window and not yet reserved. The scan restarts from `now`
//! for every reminder, it never anchors on the reminder's own due date
//! (the due date only affects the ordering step). That makes two
//! reminders with very different due dates compete for the same early
//! slot purely by sort order, which may be a latent scheduling quirk but
//! is the observed behavior and is kept.

use crate::{shared::entity::ID, AvailabilityWindow, Reminder, ScheduledSlot};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingProblem {
    #[error(
        "No availability window configured for project: {project_id}, reminder: {reminder_id} was skipped"
    )]
    MissingAvailability {
        reminder_id: String,
        project_id: String,
    },
    #[error(
        "Reminder: {reminder_id} has no open slot within {horizon_days} days in project: {project_id}"
    )]
    Unschedulable {
        reminder_id: String,
        project_id: String,
        horizon_days: u32,
    },
}

/// One placed reminder: the slot plus the reminder it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    pub reminder: Reminder,
    pub slot: ScheduledSlot,
}

/// Outcome of one scheduling pass. Problems never abort the pass, the
/// plan carries both the placements that succeeded and the reminders
/// that could not be placed.
#[derive(Debug, Default)]
pub struct SchedulePlan {
    pub assignments: Vec<SlotAssignment>,
    pub problems: Vec<SchedulingProblem>,
}

/// Assign every reminder, in the given order, the earliest hour-aligned
/// slot that is inside its project's availability window and not yet
/// reserved.
///
/// `reminders` must already be in scheduling order (see
/// [`sort_reminders`](crate::sort_reminders)). `busy` holds the starts
/// of previously persisted slots so reruns do not double-book against
/// them. `now` is injected so the search is deterministic under test.
///
/// The forward scan is bounded by `horizon_days`: availability repeats
/// weekly, so any window that admits at least one hour is found within
/// the first seven days, and a window that admits none (all weekday
/// flags false) is reported as unschedulable instead of looping forever.
pub fn assign_slots(
    user_id: &ID,
    reminders: &[Reminder],
    windows: &HashMap<String, AvailabilityWindow>,
    busy: &HashSet<NaiveDateTime>,
    now: NaiveDateTime,
    horizon_days: u32,
) -> SchedulePlan {
    let mut plan = SchedulePlan::default();
    // Hour-aligned starts taken by this run or by prior runs
    let mut reserved: HashSet<NaiveDateTime> = busy
        .iter()
        .map(|start| start.date().and_hms(start.hour(), 0, 0))
        .collect();

    for reminder in reminders {
        let window = match windows.get(&reminder.project_id) {
            Some(window) => window,
            None => {
                plan.problems.push(SchedulingProblem::MissingAvailability {
                    reminder_id: reminder.id.clone(),
                    project_id: reminder.project_id.clone(),
                });
                continue;
            }
        };

        let mut hour = now.hour();
        let mut days_ahead = 0;
        let start = loop {
            if days_ahead > horizon_days {
                plan.problems.push(SchedulingProblem::Unschedulable {
                    reminder_id: reminder.id.clone(),
                    project_id: reminder.project_id.clone(),
                    horizon_days,
                });
                break None;
            }

            let date = now.date() + Duration::days(days_ahead as i64);
            let candidate = date.and_hms(hour, 0, 0);
            if window.is_open(date.weekday(), hour) && !reserved.contains(&candidate) {
                break Some(candidate);
            }

            hour += 1;
            if hour == 24 {
                hour = 0;
                days_ahead += 1;
            }
        };

        if let Some(start) = start {
            reserved.insert(start);
            plan.assignments.push(SlotAssignment {
                reminder: reminder.clone(),
                slot: ScheduledSlot::new(user_id.clone(), reminder, start),
            });
        }
    }

    plan
}
