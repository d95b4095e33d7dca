use super::IAvailabilityRepo;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use taskcal_domain::{AvailabilityWindow, WeekdayFlags, ID};

pub struct PostgresAvailabilityRepo {
    pool: PgPool,
}

impl PostgresAvailabilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WindowRaw {
    user_uid: Uuid,
    project_id: String,
    name: String,
    start_hour: i16,
    end_hour: i16,
    sunday: bool,
    monday: bool,
    tuesday: bool,
    wednesday: bool,
    thursday: bool,
    friday: bool,
    saturday: bool,
}

impl Into<AvailabilityWindow> for WindowRaw {
    fn into(self) -> AvailabilityWindow {
        AvailabilityWindow {
            user_id: self.user_uid.into(),
            project_id: self.project_id,
            name: self.name,
            start_hour: self.start_hour as u32,
            end_hour: self.end_hour as u32,
            days: WeekdayFlags([
                self.sunday,
                self.monday,
                self.tuesday,
                self.wednesday,
                self.thursday,
                self.friday,
                self.saturday,
            ]),
        }
    }
}

#[async_trait::async_trait]
impl IAvailabilityRepo for PostgresAvailabilityRepo {
    async fn upsert(&self, window: &AvailabilityWindow) -> anyhow::Result<()> {
        let days = &window.days.0;
        sqlx::query(
            r#"
            INSERT INTO availability_windows(
                user_uid, project_id, name, start_hour, end_hour,
                sunday, monday, tuesday, wednesday, thursday, friday, saturday
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_uid, project_id) DO UPDATE SET
                name = EXCLUDED.name,
                start_hour = EXCLUDED.start_hour,
                end_hour = EXCLUDED.end_hour,
                sunday = EXCLUDED.sunday,
                monday = EXCLUDED.monday,
                tuesday = EXCLUDED.tuesday,
                wednesday = EXCLUDED.wednesday,
                thursday = EXCLUDED.thursday,
                friday = EXCLUDED.friday,
                saturday = EXCLUDED.saturday
            "#,
        )
        .bind(window.user_id.inner_ref())
        .bind(&window.project_id)
        .bind(&window.name)
        .bind(window.start_hour as i16)
        .bind(window.end_hour as i16)
        .bind(days[0])
        .bind(days[1])
        .bind(days[2])
        .bind(days[3])
        .bind(days[4])
        .bind(days[5])
        .bind(days[6])
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow> {
        let window: WindowRaw = sqlx::query_as(
            r#"
            SELECT * FROM availability_windows AS w
            WHERE w.user_uid = $1 AND w.project_id = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(project_id)
        .fetch_one(&self.pool)
        .await
        .ok()?;
        Some(window.into())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<AvailabilityWindow> {
        let windows: Vec<WindowRaw> = match sqlx::query_as(
            r#"
            SELECT * FROM availability_windows AS w
            WHERE w.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        {
            Ok(windows) => windows,
            Err(_) => vec![],
        };
        windows.into_iter().map(|w| w.into()).collect()
    }

    async fn delete(&self, user_id: &ID, project_id: &str) -> Option<AvailabilityWindow> {
        let window: WindowRaw = sqlx::query_as(
            r#"
            DELETE FROM availability_windows AS w
            WHERE w.user_uid = $1 AND w.project_id = $2
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(project_id)
        .fetch_one(&self.pool)
        .await
        .ok()?;
        Some(window.into())
    }
}
