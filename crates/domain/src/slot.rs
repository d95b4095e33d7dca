use crate::{
    shared::entity::{Entity, ID},
    Reminder,
};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Every slot is exactly one hour long.
pub const SLOT_DURATION_MINUTES: i64 = 60;

/// A concrete calendar slot assigned to one reminder. At most one live
/// slot exists per reminder id; rescheduling deletes the old row before
/// inserting the new one.
///
/// Times are naive local wall-clock, timezone handling is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    pub user_id: ID,
    /// External id of the reminder this slot belongs to
    pub reminder_id: String,
    pub project_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Display fields carried through unmodified for the calendar export
    pub name: String,
    pub description: String,
    pub priority: i64,
    pub due_date: String,
}

impl ScheduledSlot {
    pub fn new(user_id: ID, reminder: &Reminder, start: NaiveDateTime) -> Self {
        Self {
            user_id,
            reminder_id: reminder.id.clone(),
            project_id: reminder.project_id.clone(),
            start,
            end: start + Duration::minutes(SLOT_DURATION_MINUTES),
            name: reminder.content.clone(),
            description: reminder.description.clone(),
            priority: reminder.priority,
            due_date: reminder.due_date.clone(),
        }
    }
}

impl Entity<String> for ScheduledSlot {
    fn id(&self) -> String {
        self.reminder_id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn slot_lasts_sixty_minutes() {
        let reminder = Reminder {
            id: "7032".into(),
            project_id: "2203306141".into(),
            due_date: "2024-01-05".into(),
            priority: 3,
            content: "Write report".into(),
            description: "quarterly".into(),
        };
        let start = NaiveDate::from_ymd(2024, 1, 1).and_hms(9, 0, 0);
        let slot = ScheduledSlot::new(ID::new(), &reminder, start);
        assert_eq!(slot.end - slot.start, Duration::minutes(60));
        assert_eq!(slot.name, "Write report");
        assert_eq!(slot.reminder_id, "7032");
    }
}
