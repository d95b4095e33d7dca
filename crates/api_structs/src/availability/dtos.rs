use serde::{Deserialize, Serialize};
use taskcal_domain::AvailabilityWindow;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindowDTO {
    pub project_id: String,
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    /// Sunday-first weekday flags
    pub days: [bool; 7],
}

impl AvailabilityWindowDTO {
    pub fn new(window: AvailabilityWindow) -> Self {
        Self {
            project_id: window.project_id,
            name: window.name,
            start_hour: window.start_hour,
            end_hour: window.end_hour,
            days: window.days.0,
        }
    }
}
