//! Tracks the status of the current import run.
//!
//! A run is a single synchronous pass, so there is no shared job table here:
//! the pipeline owns one `RunState`, moves it through the stages and logs
//! every transition under the run id. The recorded history is what callers
//! and tests inspect after the run.

use common::jobs::{RunStage, RunStatus, RunSummary};
use log::{error, info};
use uuid::Uuid;

/// Status and transition history of one import run.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Unique identifier of this run, attached to every log line.
    pub run_id: String,
    status: RunStatus,
    history: Vec<RunStatus>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    /// A pending run with a fresh run id.
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            status: RunStatus::Pending,
            history: vec![RunStatus::Pending],
        }
    }

    /// Marks `stage` as the stage in progress.
    pub fn advance(&mut self, stage: RunStage) {
        info!("[{}] stage {:?}", self.run_id, stage);
        self.set(RunStatus::InProgress(stage));
    }

    /// Final state of a successful run.
    pub fn complete(&mut self, summary: RunSummary) {
        info!("[{}] completed: {:?}", self.run_id, summary);
        self.set(RunStatus::Completed(summary));
    }

    /// Final state of an aborted run.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        error!("[{}] aborted: {}", self.run_id, reason);
        self.set(RunStatus::Failed(reason));
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Every status the run went through, oldest first.
    pub fn history(&self) -> &[RunStatus] {
        &self.history
    }

    fn set(&mut self, status: RunStatus) {
        self.history.push(status.clone());
        self.status = status;
    }
}
