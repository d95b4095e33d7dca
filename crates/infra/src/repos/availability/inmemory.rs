use super::IAvailabilityRepo;
use std::sync::Mutex;
use taskcal_domain::{AvailabilityWindow, ID};

pub struct InMemoryAvailabilityRepo {
    windows: Mutex<Vec<AvailabilityWindow>>,
}

impl InMemoryAvailabilityRepo {
    pub fn new() -> Self {
        Self {
            windows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAvailabilityRepo for InMemoryAvailabilityRepo {
    async fn upsert(&self, window: &AvailabilityWindow) -> anyhow::Result<()> {
        let mut windows = self.windows.lock().unwrap();
        windows.retain(|w| !(w.user_id == window.user_id && w.project_id == window.project_id));
        windows.push(window.clone());
        Ok(())
    }

    async fn find(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow> {
        let windows = self.windows.lock().unwrap();
        windows
            .iter()
            .find(|w| w.user_id == *user_id && w.project_id == project_id)
            .cloned()
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<AvailabilityWindow> {
        let windows = self.windows.lock().unwrap();
        windows
            .iter()
            .filter(|w| w.user_id == *user_id)
            .cloned()
            .collect()
    }

    async fn delete(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow> {
        let mut windows = self.windows.lock().unwrap();
        let pos = windows
            .iter()
            .position(|w| w.user_id == *user_id && w.project_id == project_id)?;
        Some(windows.remove(pos))
    }
}
