use super::IRunMarkerRepo;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;
use taskcal_domain::ID;

pub struct InMemoryRunMarkerRepo {
    markers: Mutex<HashMap<ID, NaiveDate>>,
}

impl InMemoryRunMarkerRepo {
    pub fn new() -> Self {
        Self {
            markers: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl IRunMarkerRepo for InMemoryRunMarkerRepo {
    async fn try_claim(&self, user_id: &ID, today: NaiveDate) -> anyhow::Result<bool> {
        // The lock makes check-and-set one step, like the conditional
        // upsert in the postgres repo
        let mut markers = self.markers.lock().unwrap();
        match markers.get(user_id) {
            Some(last_run) if *last_run >= today => Ok(false),
            _ => {
                markers.insert(user_id.clone(), today);
                Ok(true)
            }
        }
    }
}
