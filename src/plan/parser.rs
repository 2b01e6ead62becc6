//! Plan parser: markdown body to ordered layers and tasks.
//!
//! Only the `## Implementation Plan` section is read. Inside it, every line
//! goes through [`classify_line`], which sorts it into one of four shapes:
//!
//! ```text
//! ## Success Metrics                            -> SectionHeading
//! #### Security Layer (3 tasks)                 -> LayerHeader
//! - [x] **SEC-001**: Hash passwords [Estimate: 2h]   -> Task
//! anything else                                 -> Other
//! ```
//!
//! Malformed or missing sections degrade to an empty plan. Task ID
//! uniqueness is not checked here.

use std::sync::LazyLock;

use regex::Regex;

use crate::spec::{Layer, Task, TaskStatus};

/// Heading text that opens the captured section.
pub const PLAN_SECTION: &str = "Implementation Plan";

const ESTIMATE_LABEL: &str = "Estimate:";

static LAYER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^####\s+(.+?)\s*\(.*\)\s*$").expect("layer header pattern is valid")
});

/// The shape of a single body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine<'a> {
    /// A level-2 heading with its trimmed text.
    SectionHeading(&'a str),
    /// `#### <Name> (<anything>)` with the trimmed name.
    LayerHeader(&'a str),
    /// A checklist item with a bold ID.
    Task(TaskLine<'a>),
    /// Anything else.
    Other,
}

/// Fields of a checklist line, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine<'a> {
    /// Text between the `**` markers.
    pub id: &'a str,
    /// Description with the trailing estimate removed.
    pub description: &'a str,
    /// `true` when the box holds `x`.
    pub completed: bool,
    /// Estimate without its label.
    pub estimate: Option<&'a str>,
}

impl TaskLine<'_> {
    fn to_task(&self, layer: &str) -> Task {
        Task {
            id: self.id.to_string(),
            description: self.description.to_string(),
            status: if self.completed { TaskStatus::Completed } else { TaskStatus::Pending },
            layer: layer.to_string(),
            estimate: self.estimate.map(ToString::to_string),
        }
    }
}

/// Sorts one line into a [`PlanLine`].
#[must_use]
pub fn classify_line(line: &str) -> PlanLine<'_> {
    let line = line.trim_end();

    if let Some(heading) = line.strip_prefix("## ") {
        return PlanLine::SectionHeading(heading.trim());
    }
    if let Some(name) = LAYER_HEADER.captures(line).and_then(|c| c.get(1)) {
        return PlanLine::LayerHeader(name.as_str());
    }
    parse_task_line(line).map_or(PlanLine::Other, PlanLine::Task)
}

/// Returns `true` if a level-2 heading text opens the plan section.
#[must_use]
pub fn is_plan_heading(heading: &str) -> bool {
    heading.eq_ignore_ascii_case(PLAN_SECTION)
}

fn parse_task_line(line: &str) -> Option<TaskLine<'_>> {
    let rest = line.trim_start().strip_prefix("- [")?;
    let completed = match rest.chars().next()? {
        ' ' => false,
        'x' => true,
        _ => return None,
    };
    let rest = rest[1..].strip_prefix(']')?.trim_start().strip_prefix("**")?;
    let (id, rest) = rest.split_once("**")?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    let rest = rest.trim_start().strip_prefix(':')?.trim();
    let (description, estimate) = split_estimate(rest);
    if description.is_empty() {
        return None;
    }
    Some(TaskLine { id, description, completed, estimate })
}

/// Splits a trailing `[...]` group off the description.
///
/// Only the last bracket group counts, so brackets earlier in the
/// description stay part of it.
fn split_estimate(text: &str) -> (&str, Option<&str>) {
    let Some(inner) = text.strip_suffix(']') else {
        return (text, None);
    };
    let Some(open) = inner.rfind('[') else {
        return (text, None);
    };
    let raw = inner[open + 1..].trim();
    let estimate = raw.strip_prefix(ESTIMATE_LABEL).unwrap_or(raw).trim();
    (inner[..open].trim_end(), (!estimate.is_empty()).then_some(estimate))
}

/// Parses the implementation plan of a document body.
///
/// Returns an empty vector when the body has no plan section.
#[must_use]
pub fn parse_plan(body: &str) -> Vec<Layer> {
    let mut layers = Vec::new();
    let mut open: Option<Layer> = None;
    let mut capturing = false;

    for line in body.lines() {
        match classify_line(line) {
            PlanLine::SectionHeading(heading) if is_plan_heading(heading) => capturing = true,
            PlanLine::SectionHeading(_) => {
                if capturing {
                    layers.extend(open.take());
                }
                capturing = false;
            }
            _ if !capturing => {}
            PlanLine::LayerHeader(name) => {
                layers.extend(open.take());
                open = Some(Layer::new(name));
            }
            PlanLine::Task(task) => {
                if let Some(layer) = open.as_mut() {
                    let task = task.to_task(&layer.name);
                    layer.tasks.push(task);
                }
            }
            PlanLine::Other => {}
        }
    }

    layers.extend(open);
    layers
}

/// Total number of tasks across all layers.
#[must_use]
pub fn task_count(layers: &[Layer]) -> usize {
    layers.iter().map(|l| l.tasks.len()).sum()
}
