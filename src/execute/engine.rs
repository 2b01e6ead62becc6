//! Layer-by-layer execution of a spec's implementation plan.
//!
//! The engine walks the parsed plan in document order. Ticked tasks are
//! counted without running them, so a halted run can simply be started
//! again. Each pending task is handed to the [`TaskExecutor`] once; the
//! first failure stops the run. Progress is written back after every
//! successful task, and a log block is appended when the whole plan is
//! done. Neither write can fail the run.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::{mark_task_completed, parse_plan, task_count};
use crate::ports::{Clock, SpecContext, SpecRepository, TaskExecutor};
use crate::spec::{Layer, Task};

/// Errors that prevent a run from starting.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The spec does not exist.
    #[error("Spec not found: {0}")]
    NotFound(String),

    /// The spec could not be loaded.
    #[error("Store error: {0}")]
    Store(String),

    /// An unexpected fault inside the engine.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Nothing has happened yet.
    NotStarted,
    /// Tasks are being executed.
    Running,
    /// Every task is completed.
    Succeeded,
    /// A task failed and the run stopped.
    Failed,
}

/// Summary of one run over a spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Spec that was executed.
    pub spec_id: String,
    /// Final state of the run.
    pub state: RunState,
    /// `true` when every task is completed.
    pub success: bool,
    /// Tasks counted as completed, including ones ticked before the run.
    pub completed_tasks: usize,
    /// Tasks in the plan.
    pub total_tasks: usize,
    /// Layers whose tasks were all completed.
    pub layers_completed: usize,
    /// Layers in the plan.
    pub total_layers: usize,
    /// ID of the task that stopped the run.
    pub failed_task_id: Option<String>,
    /// Executor message for the failed task.
    pub error: Option<String>,
    /// Wall-clock duration such as `1m 5s` or `42s`.
    pub execution_time: String,
}

/// Runs implementation plans through a [`TaskExecutor`].
pub struct ExecutionEngine<'a> {
    repo: &'a dyn SpecRepository,
    executor: &'a dyn TaskExecutor,
    clock: &'a dyn Clock,
}

impl<'a> ExecutionEngine<'a> {
    /// Creates an engine over the given store, executor and clock.
    #[must_use]
    pub fn new(
        repo: &'a dyn SpecRepository,
        executor: &'a dyn TaskExecutor,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { repo, executor, clock }
    }

    /// Executes every pending task of `spec_id`.
    ///
    /// A task failure is reported in the result, not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the spec does not exist,
    /// [`EngineError::Store`] if it cannot be loaded, and
    /// [`EngineError::Internal`] if a parsed task line cannot be found again
    /// in the body.
    pub async fn execute(&self, spec_id: &str) -> Result<ExecutionResult, EngineError> {
        let stored = self
            .repo
            .get_spec(spec_id)
            .await
            .map_err(|e| EngineError::Store(e.to_string()))?
            .ok_or_else(|| EngineError::NotFound(spec_id.to_string()))?;

        let started = self.clock.now();
        let layers = parse_plan(&stored.body_md);
        let mut run = Run::new(spec_id, &layers);

        if layers.is_empty() {
            tracing::info!(spec_id = %spec_id, "No implementation plan to execute");
            run.state = RunState::Succeeded;
            return Ok(run.finish(String::from("0s")));
        }

        let context = SpecContext {
            spec_id: stored.id.clone(),
            title: stored.title.clone(),
            body_md: stored.body_md.clone(),
        };
        let mut body = stored.body_md;
        run.state = RunState::Running;
        tracing::info!(
            spec_id = %spec_id,
            layers = layers.len(),
            tasks = run.total_tasks,
            "Starting execution"
        );

        'layers: for layer in &layers {
            tracing::debug!(layer = %layer.name, "Executing layer");
            for task in &layer.tasks {
                if task.is_completed() {
                    run.completed_tasks += 1;
                    continue;
                }
                if let Err(message) = self.run_task(task, &context).await {
                    tracing::warn!(
                        spec_id = %spec_id,
                        task_id = %task.id,
                        error = %message,
                        "Task failed, halting run"
                    );
                    run.state = RunState::Failed;
                    run.failed_task_id = Some(task.id.clone());
                    run.error = Some(message);
                    break 'layers;
                }
                run.completed_tasks += 1;
                body = tick(&body, &task.id)?;
                self.persist(spec_id, &body, "task progress").await;
            }
            run.layers_completed += 1;
        }

        let elapsed = format_elapsed((self.clock.now() - started).num_seconds());
        if run.state == RunState::Running {
            run.state = RunState::Succeeded;
            if !body.ends_with('\n') {
                body.push('\n');
            }
            body.push_str(&self.log_block(&run, &elapsed));
            self.persist(spec_id, &body, "execution log").await;
            tracing::info!(
                spec_id = %spec_id,
                tasks = run.completed_tasks,
                elapsed = %elapsed,
                "Execution completed"
            );
        }

        Ok(run.finish(elapsed))
    }

    async fn run_task(&self, task: &Task, context: &SpecContext) -> Result<(), String> {
        tracing::debug!(task_id = %task.id, "Executing task");
        match self.executor.execute(task, context).await {
            Ok(outcome) if outcome.success => Ok(()),
            Ok(outcome) => Err(outcome.error.unwrap_or_else(|| String::from("task failed"))),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn persist(&self, spec_id: &str, body: &str, what: &str) {
        if let Err(e) = self.repo.update_spec(spec_id, body).await {
            tracing::warn!(spec_id = %spec_id, error = %e, "Failed to persist {what}");
        }
    }

    fn log_block(&self, run: &Run, elapsed: &str) -> String {
        let mut block = String::from("\n## Execution Log\n\n");
        let executed = self.clock.now().format("%Y-%m-%d %H:%M:%S UTC");
        let _ = writeln!(block, "- **Executed**: {executed}");
        let (layers, total_layers) = (run.layers_completed, run.total_layers);
        let _ = writeln!(block, "- **Layers completed**: {layers}/{total_layers}");
        let (tasks, total_tasks) = (run.completed_tasks, run.total_tasks);
        let _ = writeln!(block, "- **Tasks completed**: {tasks}/{total_tasks}");
        let _ = writeln!(block, "- **Duration**: {elapsed}");
        block
    }
}

/// Ticks the checkbox of a task the parser just read from `body`.
fn tick(body: &str, task_id: &str) -> Result<String, EngineError> {
    mark_task_completed(body, task_id)
        .ok_or_else(|| EngineError::Internal(format!("task line {task_id} vanished from the plan")))
}

struct Run {
    spec_id: String,
    state: RunState,
    completed_tasks: usize,
    total_tasks: usize,
    layers_completed: usize,
    total_layers: usize,
    failed_task_id: Option<String>,
    error: Option<String>,
}

impl Run {
    fn new(spec_id: &str, layers: &[Layer]) -> Self {
        Self {
            spec_id: spec_id.to_string(),
            state: RunState::NotStarted,
            completed_tasks: 0,
            total_tasks: task_count(layers),
            layers_completed: 0,
            total_layers: layers.len(),
            failed_task_id: None,
            error: None,
        }
    }

    fn finish(self, execution_time: String) -> ExecutionResult {
        ExecutionResult {
            spec_id: self.spec_id,
            success: self.state == RunState::Succeeded,
            state: self.state,
            completed_tasks: self.completed_tasks,
            total_tasks: self.total_tasks,
            layers_completed: self.layers_completed,
            total_layers: self.total_layers,
            failed_task_id: self.failed_task_id,
            error: self.error,
            execution_time,
        }
    }
}

/// Formats whole seconds as `{m}m {s}s`, or `{s}s` under a minute.
#[must_use]
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
