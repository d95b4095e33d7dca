use super::IRunMarkerRepo;
use chrono::NaiveDate;
use sqlx::PgPool;
use taskcal_domain::ID;

pub struct PostgresRunMarkerRepo {
    pool: PgPool,
}

impl PostgresRunMarkerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IRunMarkerRepo for PostgresRunMarkerRepo {
    async fn try_claim(&self, user_id: &ID, today: NaiveDate) -> anyhow::Result<bool> {
        // Single conditional upsert: the row only changes when the stored
        // day is older than today, so exactly one concurrent caller sees
        // an affected row.
        let res = sqlx::query(
            r#"
            INSERT INTO run_markers(user_uid, last_run)
            VALUES($1, $2)
            ON CONFLICT (user_uid) DO UPDATE SET last_run = EXCLUDED.last_run
            WHERE run_markers.last_run < EXCLUDED.last_run
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(today)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }
}
