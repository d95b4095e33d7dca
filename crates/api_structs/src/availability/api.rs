use crate::dtos::AvailabilityWindowDTO;
use serde::{Deserialize, Serialize};
use taskcal_domain::{AvailabilityWindow, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub availability: AvailabilityWindowDTO,
}

impl AvailabilityResponse {
    pub fn new(window: AvailabilityWindow) -> Self {
        Self {
            availability: AvailabilityWindowDTO::new(window),
        }
    }
}

pub mod set_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub project_id: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub start_hour: u32,
        pub end_hour: u32,
        pub days: [bool; 7],
    }

    pub type APIResponse = AvailabilityResponse;
}

pub mod get_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub availabilities: Vec<AvailabilityWindowDTO>,
    }

    impl APIResponse {
        pub fn new(windows: Vec<AvailabilityWindow>) -> Self {
            Self {
                availabilities: windows.into_iter().map(AvailabilityWindowDTO::new).collect(),
            }
        }
    }
}

pub mod delete_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub project_id: String,
    }

    pub type APIResponse = AvailabilityResponse;
}
