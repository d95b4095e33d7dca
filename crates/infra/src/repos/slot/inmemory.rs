use super::ISlotRepo;
use chrono::NaiveDateTime;
use std::sync::Mutex;
use taskcal_domain::{Entity, ScheduledSlot, ID};

pub struct InMemorySlotRepo {
    slots: Mutex<Vec<ScheduledSlot>>,
}

impl InMemorySlotRepo {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISlotRepo for InMemorySlotRepo {
    async fn insert(&self, slot: &ScheduledSlot) -> anyhow::Result<()> {
        let mut slots = self.slots.lock().unwrap();
        slots.push(slot.clone());
        Ok(())
    }

    async fn delete_by_reminder(&self, reminder_id: &str) -> anyhow::Result<()> {
        let mut slots = self.slots.lock().unwrap();
        slots.retain(|s| s.id() != reminder_id);
        Ok(())
    }

    async fn delete_by_project(&self, user_id: &ID, project_id: &str) -> anyhow::Result<()> {
        let mut slots = self.slots.lock().unwrap();
        slots.retain(|s| !(s.user_id == *user_id && s.project_id == project_id));
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<ScheduledSlot> {
        let slots = self.slots.lock().unwrap();
        slots
            .iter()
            .filter(|s| s.user_id == *user_id)
            .cloned()
            .collect()
    }

    async fn find_by_project(&self, user_id: &ID, project_id: &str) -> Vec<ScheduledSlot> {
        let slots = self.slots.lock().unwrap();
        slots
            .iter()
            .filter(|s| s.user_id == *user_id && s.project_id == project_id)
            .cloned()
            .collect()
    }

    async fn find_reserved_starts(&self, user_id: &ID) -> Vec<NaiveDateTime> {
        let slots = self.slots.lock().unwrap();
        slots
            .iter()
            .filter(|s| s.user_id == *user_id)
            .map(|s| s.start)
            .collect()
    }
}
