mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::{IAvailabilityRepo, IRunMarkerRepo, ISlotRepo};
pub use services::{ITaskSource, TodoistApi};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct TaskcalContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub task_source: Arc<dyn ITaskSource>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl TaskcalContext {
    async fn create(params: ContextParams) -> Self {
        let config = Config::new();
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let task_source = Arc::new(TodoistApi::new(config.todoist_base_url.clone()));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            task_source,
        }
    }

    /// Context backed by in-memory repos, used in tests.
    pub fn create_inmemory() -> Self {
        let config = Config::new();
        let task_source = Arc::new(TodoistApi::new(config.todoist_base_url.clone()));
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            task_source,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> TaskcalContext {
    TaskcalContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!("../../migrations").run(&pool).await
}
