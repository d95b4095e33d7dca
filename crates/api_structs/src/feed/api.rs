use crate::dtos::ScheduledSlotDTO;
use serde::{Deserialize, Serialize};
use taskcal_domain::{ScheduledSlot, ID};

pub mod get_calendar_feed {
    use super::*;

    /// Same parameter order as the calendar links the original app
    /// handed out: token first, then user, then project.
    #[derive(Deserialize)]
    pub struct PathParams {
        pub api_token: String,
        pub user_id: ID,
        pub project_id: String,
    }
}

pub mod run_schedule {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub api_token: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// False when the once-per-day gate skipped the pass
        pub ran: bool,
        pub slots: Vec<ScheduledSlotDTO>,
        pub problems: Vec<String>,
    }

    impl APIResponse {
        pub fn new(ran: bool, slots: Vec<ScheduledSlot>, problems: Vec<String>) -> Self {
            Self {
                ran,
                slots: slots.into_iter().map(ScheduledSlotDTO::new).collect(),
                problems,
            }
        }
    }
}
