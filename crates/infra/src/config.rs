use tracing::warn;

pub const DEFAULT_TODOIST_BASE_URL: &str = "https://api.todoist.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How many days ahead the slot search is allowed to scan before a
    /// reminder is reported as unschedulable. Availability repeats
    /// weekly, so anything placeable at all is found within the first
    /// seven days; the bound only exists to turn a window that admits
    /// no hour into an error instead of an endless scan.
    pub schedule_horizon_days: u32,
    /// Base url of the Todoist REST API. Overridable so tests can point
    /// the task source at a local stub.
    pub todoist_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let default_horizon = 90;
        let schedule_horizon_days = match std::env::var("SCHEDULE_HORIZON_DAYS") {
            Ok(horizon) => match horizon.parse::<u32>() {
                Ok(horizon) if horizon >= 7 => horizon,
                _ => {
                    warn!(
                        "The given SCHEDULE_HORIZON_DAYS: {} is not valid, falling back to the default: {}.",
                        horizon, default_horizon
                    );
                    default_horizon
                }
            },
            Err(_) => default_horizon,
        };
        let todoist_base_url = std::env::var("TODOIST_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TODOIST_BASE_URL.to_string());
        Self {
            port,
            schedule_horizon_days,
            todoist_base_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
