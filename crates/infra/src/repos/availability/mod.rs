mod inmemory;
mod postgres;

pub use inmemory::InMemoryAvailabilityRepo;
pub use postgres::PostgresAvailabilityRepo;
use taskcal_domain::{AvailabilityWindow, ID};

/// Persistence of the per-project weekly availability windows. Windows
/// are immutable value records, edits arrive as whole replacement rows
/// through `upsert`.
#[async_trait::async_trait]
pub trait IAvailabilityRepo: Send + Sync {
    async fn upsert(&self, window: &AvailabilityWindow) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<AvailabilityWindow>;
    async fn delete(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskcalContext;
    use taskcal_domain::WeekdayFlags;

    fn window(user_id: &ID, project_id: &str) -> AvailabilityWindow {
        AvailabilityWindow::new(
            user_id.clone(),
            project_id.into(),
            "Work".into(),
            9,
            17,
            WeekdayFlags::weekdays(),
        )
        .expect("To create window")
    }

    #[tokio::test]
    async fn upsert_find_and_delete() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();
        let w = window(&user_id, "2203306141");

        assert!(ctx.repos.availability.upsert(&w).await.is_ok());
        let res = ctx
            .repos
            .availability
            .find(&user_id, "2203306141")
            .await
            .expect("To find window");
        assert_eq!(res, w);

        let res = ctx.repos.availability.find_by_user(&user_id).await;
        assert_eq!(res.len(), 1);

        let deleted = ctx.repos.availability.delete(&user_id, "2203306141").await;
        assert_eq!(deleted, Some(w));
        assert!(ctx
            .repos
            .availability
            .find(&user_id, "2203306141")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_whole_record() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();
        let mut w = window(&user_id, "2203306141");
        ctx.repos
            .availability
            .upsert(&w)
            .await
            .expect("To insert window");

        w.start_hour = 10;
        w.days = WeekdayFlags::none();
        ctx.repos
            .availability
            .upsert(&w)
            .await
            .expect("To replace window");

        let res = ctx
            .repos
            .availability
            .find(&user_id, "2203306141")
            .await
            .expect("To find window");
        assert_eq!(res.start_hour, 10);
        assert_eq!(res.days, WeekdayFlags::none());
        assert_eq!(ctx.repos.availability.find_by_user(&user_id).await.len(), 1);
    }

    #[tokio::test]
    async fn windows_are_scoped_to_the_user() {
        let ctx = TaskcalContext::create_inmemory();
        let user_a = ID::new();
        let user_b = ID::new();
        ctx.repos
            .availability
            .upsert(&window(&user_a, "1"))
            .await
            .expect("To insert window");

        assert!(ctx.repos.availability.find(&user_b, "1").await.is_none());
        assert!(ctx.repos.availability.find_by_user(&user_b).await.is_empty());
    }
}
