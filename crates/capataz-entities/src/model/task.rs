//! Asynchronous task model types

use serde::{Deserialize, Serialize};

/// Status of an asynchronous server task
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub state: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub humanized: Option<serde_json::Value>,
}

impl TaskInfo {
    /// The task has not reached a terminal state yet
    pub fn is_pending(&self) -> bool {
        matches!(
            self.state.as_str(),
            "pending" | "planned" | "planning" | "scheduled" | "running"
        )
    }

    /// The task reached its terminal state and reported success
    pub fn succeeded(&self) -> bool {
        self.state == "stopped" && self.result.as_deref() == Some("success")
    }
}
