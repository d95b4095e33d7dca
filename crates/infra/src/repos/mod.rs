mod availability;
mod run_marker;
mod slot;

pub use availability::IAvailabilityRepo;
use availability::{InMemoryAvailabilityRepo, PostgresAvailabilityRepo};
pub use run_marker::IRunMarkerRepo;
use run_marker::{InMemoryRunMarkerRepo, PostgresRunMarkerRepo};
pub use slot::ISlotRepo;
use slot::{InMemorySlotRepo, PostgresSlotRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub availability: Arc<dyn IAvailabilityRepo>,
    pub slots: Arc<dyn ISlotRepo>,
    pub run_markers: Arc<dyn IRunMarkerRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            availability: Arc::new(PostgresAvailabilityRepo::new(pool.clone())),
            slots: Arc::new(PostgresSlotRepo::new(pool.clone())),
            run_markers: Arc::new(PostgresRunMarkerRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            availability: Arc::new(InMemoryAvailabilityRepo::new()),
            slots: Arc::new(InMemorySlotRepo::new()),
            run_markers: Arc::new(InMemoryRunMarkerRepo::new()),
        }
    }
}
