//! `specflow related` command.

use crate::config::Config;
use crate::relate::{rank_related, RankOptions};
use crate::spec::{SpecCandidate, SpecDocument};
use crate::store::SpecStore;

/// Execute the `related` command.
///
/// `limit` and `min_score` override the configured defaults.
///
/// # Errors
///
/// Returns an error string if the spec or the store cannot be read.
pub fn run(
    store: &SpecStore<'_>,
    config: &Config,
    id: &str,
    limit: Option<usize>,
    min_score: Option<f64>,
) -> Result<(), String> {
    let current = store.load(id).map_err(|e| e.to_string())?.to_candidate();
    let docs = store.load_all().map_err(|e| e.to_string())?;
    let corpus: Vec<SpecCandidate> = docs.iter().map(SpecDocument::to_candidate).collect();

    let options = RankOptions {
        min_score: min_score.unwrap_or(config.min_score),
        limit: limit.unwrap_or(config.max_suggestions),
    };
    let suggestions = rank_related(&current, &corpus, &options);
    tracing::debug!(
        spec_id = %id,
        candidates = corpus.len(),
        found = suggestions.len(),
        "Ranked related specs"
    );

    if suggestions.is_empty() {
        println!("No related specs found for {id}.");
        return Ok(());
    }
    println!("Specs related to {id}:");
    for s in &suggestions {
        let title = corpus.iter().find(|c| c.id == s.spec_id).map_or("", |c| c.title.as_str());
        println!("  {:.2}  {}  {title}", s.score, s.spec_id);
        println!("        {}", s.reason);
    }
    Ok(())
}
