//! `specflow analyze` command.

use std::fmt::Write as _;

use serde::Serialize;

use crate::analyze::{analyze, intake_priority, triage_priority};
use crate::plan::generate_plan;
use crate::spec::{ImplementationPlanSpec, Priority, RequirementProfile};

/// Everything `analyze` derives from a request.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Classified request.
    pub profile: RequirementProfile,
    /// Plan skeleton for the profile.
    pub plan: ImplementationPlanSpec,
    /// Priority from urgency words in the request.
    pub intake_priority: Priority,
    /// Priority from defect and risk signals.
    pub triage_priority: Priority,
}

impl AnalysisReport {
    /// Analyzes `text` and derives the plan and both priorities.
    #[must_use]
    pub fn build(text: &str) -> Self {
        let profile = analyze(text);
        let plan = generate_plan(&profile);
        Self {
            intake_priority: intake_priority(text),
            triage_priority: triage_priority(&profile),
            plan,
            profile,
        }
    }

    /// Renders the report for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        let p = &self.profile;
        let mut out = String::new();
        let _ = writeln!(out, "Title:      {}", p.title);
        let _ = writeln!(out, "Group:      {}", p.detected_group);
        let _ = writeln!(out, "Theme:      {}", p.detected_theme);
        let _ = writeln!(out, "Complexity: {}", p.complexity);
        let keywords =
            if p.keywords.is_empty() { "(none)".to_string() } else { p.keywords.join(", ") };
        let _ = writeln!(out, "Keywords:   {keywords}");
        let (intake, triage) = (self.intake_priority, self.triage_priority);
        let _ = writeln!(out, "Priority:   {intake} (triage: {triage})");
        let _ = writeln!(
            out,
            "\nPlan: {} approach, {} tasks across {} layers",
            self.plan.recommended_approach,
            self.plan.estimated_tasks,
            self.plan.layers.len()
        );
        for layer in &self.plan.layers {
            let _ = writeln!(out, "  - {layer}");
        }
        out
    }
}

/// Execute the `analyze` command.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn run(text: &str, json: bool) -> Result<(), String> {
    let report = AnalysisReport::build(text);
    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize analysis: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
