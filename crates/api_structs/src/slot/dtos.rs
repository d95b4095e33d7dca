use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use taskcal_domain::ScheduledSlot;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSlotDTO {
    pub reminder_id: String,
    pub project_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub name: String,
    pub description: String,
    pub priority: i64,
    pub due_date: String,
}

impl ScheduledSlotDTO {
    pub fn new(slot: ScheduledSlot) -> Self {
        Self {
            reminder_id: slot.reminder_id,
            project_id: slot.project_id,
            start: slot.start,
            end: slot.end,
            name: slot.name,
            description: slot.description,
            priority: slot.priority,
            due_date: slot.due_date,
        }
    }
}
