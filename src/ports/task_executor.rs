//! Task executor port: performs one plan task.

use serde::{Deserialize, Serialize};

use super::PortFuture;
use crate::spec::Task;

/// The spec a task belongs to, passed along with every task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecContext {
    /// Spec identifier.
    pub spec_id: String,
    /// Spec title.
    pub title: String,
    /// Markdown body as loaded at the start of the run.
    pub body_md: String,
}

/// What the executor reports for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Whether the task succeeded.
    pub success: bool,
    /// Failure message, if any.
    pub error: Option<String>,
}

impl TaskOutcome {
    /// A successful outcome.
    #[must_use]
    pub fn succeeded() -> Self {
        Self { success: true, error: None }
    }

    /// A failed outcome with a message.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }
}

/// Carries out plan tasks.
///
/// The engine calls this exactly once per pending task and does not care
/// what the implementation does. An `Err` is treated like a failed outcome.
pub trait TaskExecutor: Send + Sync {
    /// Executes a single task.
    fn execute<'a>(&'a self, task: &'a Task, spec: &'a SpecContext) -> PortFuture<'a, TaskOutcome>;
}
