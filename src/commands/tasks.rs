//! `specflow tasks` command.

use std::fmt::Write as _;

use crate::plan::{parse_plan, task_count};
use crate::spec::Layer;
use crate::store::SpecStore;

/// Execute the `tasks` command: print the parsed checklist and progress.
///
/// # Errors
///
/// Returns an error string if the spec cannot be loaded.
pub fn run(store: &SpecStore<'_>, id: &str) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    let layers = parse_plan(&doc.body_md);
    if layers.is_empty() {
        println!("{id} has no implementation plan.");
        return Ok(());
    }
    print!("{}", render_checklist(&layers));
    Ok(())
}

fn render_checklist(layers: &[Layer]) -> String {
    let mut out = String::new();
    let mut done = 0;
    for layer in layers {
        let _ = writeln!(out, "{}", layer.name);
        for task in &layer.tasks {
            let mark = if task.is_completed() {
                done += 1;
                'x'
            } else {
                ' '
            };
            let _ = write!(out, "  [{mark}] {}  {}", task.id, task.description);
            if let Some(estimate) = &task.estimate {
                let _ = write!(out, " ({estimate})");
            }
            out.push('\n');
        }
    }
    let _ = writeln!(out, "\n{done}/{} tasks completed", task_count(layers));
    out
}
