use super::ISlotRepo;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use taskcal_domain::{ScheduledSlot, ID};

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SlotRaw {
    reminder_id: String,
    user_uid: Uuid,
    project_id: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    name: String,
    description: String,
    priority: i64,
    due_date: String,
}

impl Into<ScheduledSlot> for SlotRaw {
    fn into(self) -> ScheduledSlot {
        ScheduledSlot {
            user_id: self.user_uid.into(),
            reminder_id: self.reminder_id,
            project_id: self.project_id,
            start: self.start_time,
            end: self.end_time,
            name: self.name,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

#[async_trait::async_trait]
impl ISlotRepo for PostgresSlotRepo {
    async fn insert(&self, slot: &ScheduledSlot) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_slots(
                reminder_id, user_uid, project_id, start_time, end_time,
                name, description, priority, due_date
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&slot.reminder_id)
        .bind(slot.user_id.inner_ref())
        .bind(&slot.project_id)
        .bind(slot.start)
        .bind(slot.end)
        .bind(&slot.name)
        .bind(&slot.description)
        .bind(slot.priority)
        .bind(&slot.due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_reminder(&self, reminder_id: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM scheduled_slots AS s
            WHERE s.reminder_id = $1
            "#,
        )
        .bind(reminder_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_project(&self, user_id: &ID, project_id: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM scheduled_slots AS s
            WHERE s.user_uid = $1 AND s.project_id = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(project_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<ScheduledSlot> {
        let slots: Vec<SlotRaw> = match sqlx::query_as(
            r#"
            SELECT * FROM scheduled_slots AS s
            WHERE s.user_uid = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        {
            Ok(slots) => slots,
            Err(_) => vec![],
        };
        slots.into_iter().map(|s| s.into()).collect()
    }

    async fn find_by_project(&self, user_id: &ID, project_id: &str) -> Vec<ScheduledSlot> {
        let slots: Vec<SlotRaw> = match sqlx::query_as(
            r#"
            SELECT * FROM scheduled_slots AS s
            WHERE s.user_uid = $1 AND s.project_id = $2
            ORDER BY s.start_time
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        {
            Ok(slots) => slots,
            Err(_) => vec![],
        };
        slots.into_iter().map(|s| s.into()).collect()
    }

    async fn find_reserved_starts(&self, user_id: &ID) -> Vec<NaiveDateTime> {
        let starts: Vec<(NaiveDateTime,)> = match sqlx::query_as(
            r#"
            SELECT s.start_time FROM scheduled_slots AS s
            WHERE s.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        {
            Ok(starts) => starts,
            Err(_) => vec![],
        };
        starts.into_iter().map(|s| s.0).collect()
    }
}
