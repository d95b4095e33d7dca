mod inmemory;
mod postgres;

use chrono::NaiveDateTime;
pub use inmemory::InMemorySlotRepo;
pub use postgres::PostgresSlotRepo;
use taskcal_domain::{ScheduledSlot, ID};

/// Persistence of the scheduler's output. One live slot per reminder id;
/// rescheduling is delete-then-insert.
#[async_trait::async_trait]
pub trait ISlotRepo: Send + Sync {
    async fn insert(&self, slot: &ScheduledSlot) -> anyhow::Result<()>;
    async fn delete_by_reminder(&self, reminder_id: &str) -> anyhow::Result<()>;
    async fn delete_by_project(&self, user_id: &ID, project_id: &str) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<ScheduledSlot>;
    async fn find_by_project(&self, user_id: &ID, project_id: &str) -> Vec<ScheduledSlot>;
    /// Start times of every live slot for the user, the busy set the
    /// slot search must not collide with.
    async fn find_reserved_starts(&self, user_id: &ID) -> Vec<NaiveDateTime>;
}
