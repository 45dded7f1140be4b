use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{TaskFilter, TaskStatus, TaskStatusWithId};
use crate::utils::error::{ClientError, Result};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTasksParams {
    pub filter: Option<TaskFilter>,
    pub offset: u32,
    pub limit: u32,
}

impl Default for ListTasksParams {
    fn default() -> Self {
        Self {
            filter: None,
            offset: 0,
            limit: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TasksApi {
    client: ApiClient,
}

impl TasksApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn list(&self, params: ListTasksParams) -> Result<Vec<TaskStatusWithId>> {
        let mut query = vec![
            ("offset", params.offset.to_string()),
            ("limit", params.limit.to_string()),
        ];
        if let Some(filter) = params.filter {
            query.push(("filter", filter.as_str().to_string()));
        }
        let request = self
            .client
            .request(Method::GET, &["tasks", "list"])?
            .query(&query);
        self.client.send_json(request).await
    }

    pub async fn status(&self, task: Uuid) -> Result<TaskStatus> {
        let task = task.to_string();
        let request = self
            .client
            .request(Method::GET, &["tasks", task.as_str(), "status"])?;
        self.client.send_json(request).await
    }

    /// `force` skips the task's clean-up.
    pub async fn abort(&self, task: Uuid, force: bool) -> Result<()> {
        let task = task.to_string();
        let request = self
            .client
            .request(Method::DELETE, &["tasks", task.as_str()])?
            .query(&[("force", force)]);
        self.client.send_empty(request).await
    }

    /// Polls the task until it is no longer running.
    pub async fn wait_for_completion(
        &self,
        task: Uuid,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<TaskStatus> {
        match tokio::time::timeout(timeout, self.poll_until_finished(task, poll_interval)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Task {} still running after {:?}", task, timeout);
                Err(ClientError::TaskTimeout {
                    task_id: task,
                    elapsed: timeout,
                })
            }
        }
    }

    async fn poll_until_finished(&self, task: Uuid, poll_interval: Duration) -> Result<TaskStatus> {
        loop {
            let status = self.status(task).await?;
            if status.is_finished() {
                tracing::info!("Task {} {}", task, status.name());
                return Ok(status);
            }

            if let TaskStatus::Running { pct_complete, .. } = &status {
                tracing::debug!("Task {} at {}", task, pct_complete);
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}
