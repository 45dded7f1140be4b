use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskFilter {
    Running,
    Aborted,
    Failed,
    Completed,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::Running => "running",
            TaskFilter::Aborted => "aborted",
            TaskFilter::Failed => "failed",
            TaskFilter::Completed => "completed",
        }
    }
}

/// `info`, `cleanUp` and `error` may be `null` or missing on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TaskStatus {
    #[serde(rename_all = "camelCase")]
    Running {
        pct_complete: String,
        estimated_time_remaining: String,
        #[serde(default)]
        info: Option<serde_json::Value>,
        task_type: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        time_started: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Completed {
        #[serde(default)]
        info: Option<serde_json::Value>,
        time_total: String,
        task_type: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        time_started: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Aborted {
        #[serde(default)]
        clean_up: Option<serde_json::Value>,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        #[serde(default)]
        error: Option<serde_json::Value>,
        #[serde(default)]
        clean_up: Option<serde_json::Value>,
    },
}

impl TaskStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, TaskStatus::Running { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Running { .. } => "running",
            TaskStatus::Completed { .. } => "completed",
            TaskStatus::Aborted { .. } => "aborted",
            TaskStatus::Failed { .. } => "failed",
        }
    }
}

/// A status entry of the task list: the id sits next to the status fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusWithId {
    pub task_id: Uuid,
    #[serde(flatten)]
    pub status: TaskStatus,
}
