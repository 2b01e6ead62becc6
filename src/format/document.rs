//! Spec document formatter.
//!
//! Renders a profile and plan into the canonical markdown skeleton. The
//! task breakdown threads one sequence number through every layer so task
//! IDs never repeat within a document, e.g. `SEC-001 SEC-002 BAC-003`.

use std::fmt::Write as _;

use serde::Serialize;

use super::templates::{group_template, layer_tasks};
use crate::plan::parser::PLAN_SECTION;
use crate::spec::{Complexity, ImplementationPlanSpec, RequirementProfile};

const FALLBACK_PREFIX: &str = "TSK";

/// A task produced by the breakdown generator, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTask {
    /// Document-unique ID.
    pub id: String,
    /// Rendered description.
    pub description: String,
    /// Effort estimate (e.g. `2h`).
    pub estimate: String,
}

/// Generated tasks for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedLayer {
    /// Layer name.
    pub name: String,
    /// Tasks in order.
    pub tasks: Vec<GeneratedTask>,
}

/// Builds a task ID from the layer name and sequence number.
///
/// The prefix is the first three letters of the layer name, uppercased.
#[must_use]
pub fn task_id(layer: &str, seq: usize) -> String {
    let prefix: String =
        layer.chars().filter(char::is_ascii_alphabetic).take(3).collect::<String>().to_uppercase();
    let prefix = if prefix.is_empty() { FALLBACK_PREFIX.to_string() } else { prefix };
    format!("{prefix}-{seq:03}")
}

/// Splits `total` tasks over `layers` layers, earliest layers taking the remainder.
///
/// Every layer gets at least one task.
#[must_use]
pub fn distribute_tasks(total: usize, layers: usize) -> Vec<usize> {
    if layers == 0 {
        return Vec::new();
    }
    let base = total / layers;
    let remainder = total % layers;
    (0..layers).map(|i| (base + usize::from(i < remainder)).max(1)).collect()
}

/// Generates one layer's tasks starting at `first_seq`.
///
/// Returns the layer and the next unused sequence number.
#[must_use]
pub fn generate_layer(
    name: &str,
    count: usize,
    feature: &str,
    first_seq: usize,
) -> (GeneratedLayer, usize) {
    let templates = layer_tasks(name);
    let tasks = (0..count)
        .map(|i| {
            let (description, estimate) = templates[i % templates.len()];
            GeneratedTask {
                id: task_id(name, first_seq + i),
                description: description.replace("{feature}", feature),
                estimate: estimate.to_string(),
            }
        })
        .collect();
    (GeneratedLayer { name: name.to_string(), tasks }, first_seq + count)
}

/// Generates the full task breakdown for a plan.
#[must_use]
pub fn task_breakdown(plan: &ImplementationPlanSpec, feature: &str) -> Vec<GeneratedLayer> {
    let counts = distribute_tasks(plan.estimated_tasks, plan.layers.len());
    let (layers, _) = plan.layers.iter().zip(counts).fold(
        (Vec::with_capacity(plan.layers.len()), 1),
        |(mut acc, seq), (name, count)| {
            let (layer, next) = generate_layer(name, count, feature, seq);
            acc.push(layer);
            (acc, next)
        },
    );
    layers
}

/// Renders the complete markdown body of a new spec.
#[must_use]
pub fn format_document(
    profile: &RequirementProfile,
    plan: &ImplementationPlanSpec,
    description: &str,
) -> String {
    let template = group_template(profile.detected_group);
    let feature = profile.title.as_str();
    let mut out = String::new();

    let _ = writeln!(out, "# {feature}\n");

    out.push_str("## Executive Summary\n\n");
    let summary = description.trim();
    if !summary.is_empty() {
        push_quoted(&mut out, summary);
    }
    let _ = writeln!(
        out,
        "- **Feature group:** {}\n- **Theme:** {}\n- **Complexity:** {}\n- **Approach:** {}\n",
        profile.detected_group,
        profile.detected_theme,
        profile.complexity,
        plan.recommended_approach,
    );

    out.push_str("## Product Specifications\n\n");
    let _ = writeln!(out, "### Elevator Pitch\n\n{}\n", template.pitch);
    push_list(&mut out, "### Target Users", template.target_users);
    push_list(&mut out, "### Core Goals", template.core_goals);
    push_list(&mut out, "### Functional Requirements", template.functional);
    if !profile.keywords.is_empty() {
        let _ = writeln!(out, "Key terms: {}\n", profile.keywords.join(", "));
    }
    push_list(&mut out, "### User Stories", template.user_stories);
    push_list(&mut out, "### Non-Goals", template.non_goals);

    out.push_str("## Technical Specifications\n\n");
    let _ = writeln!(out, "### Architecture\n\n{}\n", template.architecture);
    push_list(&mut out, "### Component Design", template.components);
    push_list(&mut out, "### Testing Strategy", template.testing);

    let breakdown = task_breakdown(plan, feature);
    let _ = writeln!(out, "## {PLAN_SECTION}\n");
    out.push_str("### Task Breakdown\n\n");
    for layer in &breakdown {
        let noun = if layer.tasks.len() == 1 { "task" } else { "tasks" };
        let _ = writeln!(out, "#### {} ({} {noun})\n", layer.name, layer.tasks.len());
        for task in &layer.tasks {
            let _ = writeln!(
                out,
                "- [ ] **{}**: {} [Estimate: {}]",
                task.id, task.description, task.estimate
            );
        }
        out.push('\n');
    }
    out.push_str("### Dependencies\n\n");
    for pair in plan.layers.windows(2) {
        let _ = writeln!(out, "- {} depends on {}", pair[1], pair[0]);
    }
    if plan.layers.len() < 2 {
        out.push_str("- None\n");
    }
    out.push('\n');

    push_list(&mut out, "## Success Metrics", template.metrics);

    out.push_str("## Timeline\n\n");
    let _ = writeln!(out, "Estimated duration: {}\n", duration_label(profile.complexity));
    for (i, layer) in plan.layers.iter().enumerate() {
        let _ = writeln!(out, "{}. {layer}", i + 1);
    }

    out
}

/// Quotes every line so headings and checklist items in free text stay inert.
fn push_quoted(out: &mut String, text: &str) {
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(">\n");
        } else {
            let _ = writeln!(out, "> {line}");
        }
    }
    out.push('\n');
}

fn push_list(out: &mut String, heading: &str, items: &[&str]) {
    let _ = writeln!(out, "{heading}\n");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}

fn duration_label(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "1 week",
        Complexity::Moderate => "2-3 weeks",
        Complexity::Complex => "4-6 weeks",
    }
}
