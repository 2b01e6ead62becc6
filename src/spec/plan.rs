//! Parsed implementation plan types.

use serde::{Deserialize, Serialize};

/// Checkbox state of a task line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Unchecked box (`- [ ]`).
    Pending,
    /// Checked box (`- [x]`).
    Completed,
}

/// A single checklist item of an implementation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Document-unique ID such as `SEC-001`.
    pub id: String,
    /// What the task asks for.
    pub description: String,
    /// Status at parse time.
    pub status: TaskStatus,
    /// Name of the layer that owns this task.
    pub layer: String,
    /// Optional effort estimate with the `Estimate:` label removed.
    pub estimate: Option<String>,
}

impl Task {
    /// Returns `true` if the checkbox was already ticked.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// A named phase of the plan holding an ordered task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name as written in its `####` heading.
    pub name: String,
    /// Tasks in document order.
    pub tasks: Vec<Task>,
}

impl Layer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), tasks: Vec::new() }
    }
}
