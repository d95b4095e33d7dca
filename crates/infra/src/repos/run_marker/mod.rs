mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryRunMarkerRepo;
pub use postgres::PostgresRunMarkerRepo;
use taskcal_domain::ID;

/// Per-user once-per-day execution guard. `try_claim` is a single atomic
/// compare-and-set: it succeeds for the first caller on a given day and
/// reads as "skip, another run already claimed today" for everyone else,
/// including concurrent requests racing within the same day.
#[async_trait::async_trait]
pub trait IRunMarkerRepo: Send + Sync {
    async fn try_claim(&self, user_id: &ID, today: NaiveDate) -> anyhow::Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskcalContext;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn first_claim_of_a_day_wins_second_is_refused() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();
        let day = NaiveDate::from_ymd(2024, 1, 1);

        assert!(ctx
            .repos
            .run_markers
            .try_claim(&user_id, day)
            .await
            .expect("To claim marker"));
        assert!(!ctx
            .repos
            .run_markers
            .try_claim(&user_id, day)
            .await
            .expect("To check marker"));
    }

    #[tokio::test]
    async fn next_day_can_be_claimed_again() {
        let ctx = TaskcalContext::create_inmemory();
        let user_id = ID::new();

        assert!(ctx
            .repos
            .run_markers
            .try_claim(&user_id, NaiveDate::from_ymd(2024, 1, 1))
            .await
            .expect("To claim marker"));
        assert!(ctx
            .repos
            .run_markers
            .try_claim(&user_id, NaiveDate::from_ymd(2024, 1, 2))
            .await
            .expect("To claim marker"));
    }

    #[tokio::test]
    async fn users_do_not_share_markers() {
        let ctx = TaskcalContext::create_inmemory();
        let day = NaiveDate::from_ymd(2024, 1, 1);

        assert!(ctx
            .repos
            .run_markers
            .try_claim(&ID::new(), day)
            .await
            .expect("To claim marker"));
        assert!(ctx
            .repos
            .run_markers
            .try_claim(&ID::new(), day)
            .await
            .expect("To claim marker"));
    }
}
