//! Implementation plans: generation, parsing and checklist updates.

pub mod checklist;
pub mod generator;
pub mod parser;

pub use checklist::mark_task_completed;
pub use generator::generate_plan;
pub use parser::{classify_line, parse_plan, task_count, PlanLine, TaskLine};
