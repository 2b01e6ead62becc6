//! Task executor that runs a configured shell command per task.
//!
//! The command template may reference `{task_id}`, `{description}`,
//! `{layer}` and `{spec_id}`; each value is single-quoted before
//! substitution. For example:
//!
//! ```text
//! ./scripts/agent.sh --spec {spec_id} --task {task_id}
//! ```

use crate::ports::shell::ShellExecutor;
use crate::ports::task_executor::{SpecContext, TaskExecutor, TaskOutcome};
use crate::ports::PortFuture;
use crate::spec::Task;

/// Runs each task as a shell command through the [`ShellExecutor`] port.
pub struct ShellTaskExecutor<'a> {
    shell: &'a dyn ShellExecutor,
    template: String,
}

impl<'a> ShellTaskExecutor<'a> {
    /// Creates an executor for the given command template.
    #[must_use]
    pub fn new(shell: &'a dyn ShellExecutor, template: impl Into<String>) -> Self {
        Self { shell, template: template.into() }
    }

    /// Renders the command for one task.
    #[must_use]
    pub fn render(&self, task: &Task, spec: &SpecContext) -> String {
        self.template
            .replace("{task_id}", &shell_quote(&task.id))
            .replace("{description}", &shell_quote(&task.description))
            .replace("{layer}", &shell_quote(&task.layer))
            .replace("{spec_id}", &shell_quote(&spec.spec_id))
    }
}

impl TaskExecutor for ShellTaskExecutor<'_> {
    fn execute<'b>(&'b self, task: &'b Task, spec: &'b SpecContext) -> PortFuture<'b, TaskOutcome> {
        Box::pin(async move {
            let command = self.render(task, spec);
            let output = self.shell.run(&command)?;
            if output.exit_code == 0 {
                return Ok(TaskOutcome::succeeded());
            }
            let stderr = output.stderr.trim();
            Ok(TaskOutcome::failed(if stderr.is_empty() {
                format!("exit code {}", output.exit_code)
            } else {
                stderr.to_string()
            }))
        })
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
