//! `specflow execute` command.

use crate::adapters::live::task_executor::ShellTaskExecutor;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::execute::{ExecutionEngine, ExecutionResult};
use crate::spec::SpecStatus;
use crate::store::SpecStore;

/// Execute the `execute` command.
///
/// Resolves `target` as an ID or search query, runs every pending task
/// through the configured shell command and reports the outcome. Status
/// moves from draft to active before the run and to completed after a
/// successful one.
///
/// # Errors
///
/// Returns an error string if no executor is configured, the spec cannot
/// be found, or a task fails.
pub fn run(
    ctx: &ServiceContext,
    store: &SpecStore<'_>,
    config: &Config,
    target: &str,
) -> Result<(), String> {
    let command = config
        .executor_command
        .as_deref()
        .ok_or("No executor configured: set SPECFLOW_EXECUTOR or executor_command")?;

    let doc = store.resolve(target).map_err(|e| e.to_string())?;
    let id = doc.metadata.id.clone();
    if doc.metadata.status == SpecStatus::Draft {
        set_status(store, &id, SpecStatus::Active);
    }

    let executor = ShellTaskExecutor::new(ctx.shell.as_ref(), command);
    let engine = ExecutionEngine::new(store, &executor, ctx.clock.as_ref());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let result = runtime.block_on(engine.execute(&id)).map_err(|e| e.to_string())?;

    report(&doc.metadata.title, &result);
    if result.success {
        set_status(store, &id, SpecStatus::Completed);
        Ok(())
    } else {
        Err(format!(
            "Task {} failed: {}",
            result.failed_task_id.as_deref().unwrap_or("?"),
            result.error.as_deref().unwrap_or("unknown error")
        ))
    }
}

fn set_status(store: &SpecStore<'_>, id: &str, status: SpecStatus) {
    if let Err(e) = store.set_status(id, status) {
        tracing::warn!(spec_id = %id, error = %e, "Failed to update spec status");
    }
}

fn report(title: &str, result: &ExecutionResult) {
    println!("Executed {}: {title}", result.spec_id);
    println!("  Layers: {}/{}", result.layers_completed, result.total_layers);
    println!("  Tasks:  {}/{}", result.completed_tasks, result.total_tasks);
    println!("  Time:   {}", result.execution_time);
    if let Some(task_id) = &result.failed_task_id {
        println!("  Failed: {task_id}");
    }
}
