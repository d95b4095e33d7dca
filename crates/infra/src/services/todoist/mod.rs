use reqwest::Client;
use serde::Deserialize;
use taskcal_domain::Reminder;
use tracing::error;

/// Where reminders come from. Abstracted so the scheduling pass can be
/// tested without talking to the real Todoist API.
#[async_trait::async_trait]
pub trait ITaskSource: Send + Sync {
    /// Fetch the pending tasks of one external project. A failure here
    /// aborts only that project's contribution to a scheduling run.
    async fn fetch_tasks(&self, access_token: &str, project_id: &str)
        -> anyhow::Result<Vec<Reminder>>;
}

#[derive(Debug, Deserialize)]
struct TodoistDue {
    date: String,
}

#[derive(Debug, Deserialize)]
struct TodoistTask {
    id: String,
    project_id: String,
    content: String,
    #[serde(default)]
    description: String,
    priority: i64,
    #[serde(default)]
    due: Option<TodoistDue>,
}

impl Into<Reminder> for TodoistTask {
    fn into(self) -> Reminder {
        Reminder {
            id: self.id,
            project_id: self.project_id,
            // Tasks without a due date sort first
            due_date: self.due.map(|d| d.date).unwrap_or_default(),
            priority: self.priority,
            content: self.content,
            description: self.description,
        }
    }
}

/// Client for the Todoist REST v2 API.
pub struct TodoistApi {
    client: Client,
    base_url: String,
}

impl TodoistApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl ITaskSource for TodoistApi {
    async fn fetch_tasks(
        &self,
        access_token: &str,
        project_id: &str,
    ) -> anyhow::Result<Vec<Reminder>> {
        let url = format!("{}/rest/v2/tasks", self.base_url);
        let tasks: Vec<TodoistTask> = self
            .client
            .get(&url)
            .query(&[("project_id", project_id)])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                error!("Fetching todoist tasks for project: {} failed: {:?}", project_id, e);
                e
            })?
            .error_for_status()?
            .json()
            .await?;

        Ok(tasks.into_iter().map(|t| t.into()).collect())
    }
}
