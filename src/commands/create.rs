//! `specflow create` command.

use chrono::{DateTime, Utc};

use crate::analyze::{analyze, intake_priority};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::format::format_document;
use crate::plan::generate_plan;
use crate::relate::{rank_related, suggest_parent, RankOptions};
use crate::spec::{SpecCandidate, SpecDocument, SpecMetadata, SpecStatus};
use crate::store::SpecStore;

/// Builds a draft document for a feature request.
#[must_use]
pub fn new_document(id: String, text: &str, now: DateTime<Utc>) -> SpecDocument {
    let profile = analyze(text);
    let plan = generate_plan(&profile);
    let body_md = format_document(&profile, &plan, text);
    SpecDocument {
        metadata: SpecMetadata {
            id,
            title: profile.title,
            feature_group: profile.detected_group,
            theme_category: profile.detected_theme,
            priority: intake_priority(text),
            status: SpecStatus::Draft,
            parent_id: None,
            created_at: now,
            updated_at: now,
        },
        body_md,
    }
}

/// Execute the `create` command.
///
/// Saves a new draft spec and prints related specs from the store. With
/// `parent_check`, the best suggestion that clears the parent threshold is
/// recorded as the parent.
///
/// # Errors
///
/// Returns an error string if the store cannot be read or written.
pub fn run(
    ctx: &ServiceContext,
    store: &SpecStore<'_>,
    config: &Config,
    text: &str,
    parent_check: bool,
) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Feature request text is empty".to_string());
    }

    let mut doc = new_document(store.new_id(), text, ctx.clock.now());
    let docs = store.load_all().map_err(|e| e.to_string())?;
    let corpus: Vec<SpecCandidate> = docs.iter().map(SpecDocument::to_candidate).collect();
    let candidate = doc.to_candidate();

    if parent_check {
        if let Some(parent) = suggest_parent(&candidate, &corpus, config.parent_threshold) {
            tracing::info!(
                spec_id = %doc.metadata.id,
                parent = %parent.spec_id,
                score = parent.score,
                "Linked parent spec"
            );
            doc.metadata.parent_id = Some(parent.spec_id);
        }
    }

    store.save(&doc).map_err(|e| e.to_string())?;
    tracing::info!(spec_id = %doc.metadata.id, group = %doc.metadata.feature_group, "Created spec");

    let meta = &doc.metadata;
    println!("Created {}: {}", meta.id, meta.title);
    println!(
        "Group: {} / {}  Priority: {}",
        meta.feature_group, meta.theme_category, meta.priority
    );
    if let Some(parent) = &meta.parent_id {
        println!("Parent: {parent}");
    }

    let options = RankOptions { min_score: config.min_score, limit: config.max_suggestions };
    let related = rank_related(&candidate, &corpus, &options);
    if !related.is_empty() {
        println!("\nRelated specs:");
        for suggestion in &related {
            println!("  {:.2}  {}  {}", suggestion.score, suggestion.spec_id, suggestion.reason);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{parse_plan, task_count};
    use crate::spec::{FeatureGroup, Priority};

    #[test]
    fn new_document_is_a_classified_draft() {
        let now = "2025-03-15T14:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let doc = new_document("spec-1".into(), "URGENT: user login with JWT tokens", now);

        assert_eq!(doc.metadata.feature_group, FeatureGroup::Auth);
        assert_eq!(doc.metadata.priority, Priority::High);
        assert_eq!(doc.metadata.status, SpecStatus::Draft);
        assert_eq!(doc.metadata.created_at, now);

        let layers = parse_plan(&doc.body_md);
        assert_eq!(layers.len(), 4);
        assert_eq!(task_count(&layers), 7);
    }
}
