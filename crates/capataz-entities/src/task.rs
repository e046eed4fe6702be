//! Client-side polling for asynchronous server tasks
//!
//! Several API calls trigger asynchronous tasks, such as synchronizing a
//! repository or publishing a content view. The server answers HTTP 202 with a
//! task id; this module polls the task-status endpoint until the task reaches
//! a terminal state or a deadline passes.

use std::time::Duration;

use capataz_client::CapatazHttpClient;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::constants::api_path;
use crate::error::{EntityError, Result};
use crate::model::TaskInfo;

/// Cadence and deadline for task polling
#[derive(Clone, Copy, Debug)]
pub struct PollSettings {
    /// Delay between the end of one status probe and the start of the next
    pub interval: Duration,
    /// Maximum time to wait before giving up
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(120),
        }
    }
}

impl PollSettings {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

/// Poll a task until it leaves its pending states.
///
/// A task that stops with a result other than `success` (or that ends up
/// `paused`, which requires operator intervention) is reported as
/// [`EntityError::TaskFailed`]; exceeding the deadline is
/// [`EntityError::TaskTimeout`].
pub(crate) async fn poll_task(
    http: &CapatazHttpClient,
    id: &str,
    settings: PollSettings,
) -> Result<TaskInfo> {
    let deadline = Instant::now() + settings.timeout;

    loop {
        let info: TaskInfo = http.get(&format!("{}/{}", api_path::TASKS, id)).await?;

        if !info.is_pending() {
            if info.succeeded() {
                return Ok(info);
            }
            return Err(EntityError::TaskFailed {
                id: info.id.clone(),
                state: info.state.clone(),
                result: info.result.unwrap_or_else(|| "unknown".to_string()),
            });
        }

        if Instant::now() >= deadline {
            return Err(EntityError::TaskTimeout {
                id: id.to_string(),
                timeout: settings.timeout,
            });
        }

        debug!(task = id, state = %info.state, "task still pending");
        sleep(settings.interval).await;
    }
}
