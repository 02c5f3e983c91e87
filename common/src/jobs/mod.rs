use serde::Serialize;

/// Stage of an import run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStage {
    Fetch,
    Assemble,
    Validate,
    Diff,
    Translate,
    Emit,
}

/// Counters reported at the end of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub markers: usize,
    pub valid: usize,
    pub invalid: usize,
    pub verified: usize,
    pub created: usize,
    pub modified: usize,
    pub deleted: usize,
    /// Translation rows still applicable after dropping stale ones.
    pub translations_kept: usize,
    /// Rows written back to the translation store as the new template.
    pub translations_written: usize,
}

/// Lifecycle of a run: `Pending`, then one `InProgress` per stage, then
/// `Completed` or `Failed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Pending,
    InProgress(RunStage),
    Completed(RunSummary),
    Failed(String),
}
