//! Priority classification.
//!
//! Two rules live here and they are deliberately kept apart:
//!
//! - [`intake_priority`] reads the raw request text for urgency language and
//!   decides the priority stored on a new spec.
//! - [`triage_priority`] looks at an analyzed profile for defect and risk
//!   signals and is reported alongside it.
//!
//! Their keyword lists differ, so the two can disagree on the same request.

use std::collections::HashSet;

use super::requirement::tokenize;
use crate::spec::{Complexity, FeatureGroup, Priority, RequirementProfile};

const INTAKE_HIGH: &[&str] = &["urgent", "critical", "asap", "blocker", "security", "production"];
const INTAKE_LOW: &[&str] = &["nice-to-have", "optional", "eventually", "someday", "cosmetic"];

const TRIAGE_HIGH: &[&str] = &["bug", "broken", "outage", "vulnerability", "payment"];
const TRIAGE_LOW: &[&str] = &["docs", "documentation", "typo", "polish", "refactor"];

/// Priority from urgency words in the request text.
///
/// High words win over low words; no match is [`Priority::Medium`].
#[must_use]
pub fn intake_priority(text: &str) -> Priority {
    let tokens = tokenize(text);
    if tokens.iter().any(|t| INTAKE_HIGH.contains(&t.as_str())) {
        Priority::High
    } else if tokens.iter().any(|t| INTAKE_LOW.contains(&t.as_str())) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Priority from defect and risk signals in an analyzed profile.
///
/// Considers the profile keywords and title words. Auth work is always
/// high; complex work is never low.
#[must_use]
pub fn triage_priority(profile: &RequirementProfile) -> Priority {
    let title_tokens = tokenize(&profile.title);
    let signals: HashSet<&str> =
        profile.keywords.iter().chain(title_tokens.iter()).map(String::as_str).collect();

    if profile.detected_group == FeatureGroup::Auth
        || TRIAGE_HIGH.iter().any(|w| signals.contains(w))
    {
        Priority::High
    } else if profile.complexity != Complexity::Complex
        && TRIAGE_LOW.iter().any(|w| signals.contains(w))
    {
        Priority::Low
    } else {
        Priority::Medium
    }
}
