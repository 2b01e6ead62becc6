//! Similarity scoring and relationship ranking.
//!
//! Scores are relative to one designated "current" spec: the title and
//! group bonuses are computed against it, so ranking A against B and B
//! against A need not agree.

use std::collections::{BTreeSet, HashSet};

use crate::spec::{RelationshipSuggestion, SpecCandidate};

use super::keywords::{extract_keywords, is_distinctive};

/// Candidates scoring below this are not suggested.
pub const DEFAULT_MIN_SCORE: f64 = 0.2;
/// Maximum number of suggestions returned.
pub const DEFAULT_LIMIT: usize = 10;
/// Minimum score for a parent suggestion.
pub const DEFAULT_PARENT_THRESHOLD: f64 = 0.5;

const DISTINCTIVE_BONUS: f64 = 0.1;
const DISTINCTIVE_LEN: usize = 8;
const GROUP_BONUS: f64 = 0.15;
const TITLE_WORD_BONUS: f64 = 0.1;

const RELATED: &str = "related";
const PARENT: &str = "parent";

/// Filtering and truncation for [`rank_related`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Drop candidates scoring below this.
    pub min_score: f64,
    /// Keep at most this many suggestions.
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self { min_score: DEFAULT_MIN_SCORE, limit: DEFAULT_LIMIT }
    }
}

/// Jaccard similarity of two keyword sets plus a bonus per shared
/// distinctive keyword, capped at 1.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn keyword_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let shared: Vec<&String> = a.intersection(b).collect();
    let jaccard = shared.len() as f64 / union as f64;
    let distinctive = shared.iter().filter(|k| is_distinctive(k, DISTINCTIVE_LEN)).count();
    (jaccard + DISTINCTIVE_BONUS * distinctive as f64).min(1.0)
}

/// Base similarity of two texts.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    keyword_similarity(&extract_keywords(a), &extract_keywords(b))
}

/// Ranks candidates by how closely they relate to `current`.
///
/// The current spec itself is skipped if it appears among the candidates.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rank_related(
    current: &SpecCandidate,
    candidates: &[SpecCandidate],
    options: &RankOptions,
) -> Vec<RelationshipSuggestion> {
    let current_keywords = extract_keywords(&content_of(current));
    let current_title = title_words(&current.title);

    let mut suggestions: Vec<RelationshipSuggestion> = candidates
        .iter()
        .filter(|candidate| candidate.id != current.id)
        .map(|candidate| {
            let candidate_keywords = extract_keywords(&content_of(candidate));
            let base = keyword_similarity(&current_keywords, &candidate_keywords);
            let same_group = candidate.feature_group == current.feature_group;
            let shared_title = title_words(&candidate.title).intersection(&current_title).count();

            let group_bonus = if same_group { GROUP_BONUS } else { 0.0 };
            let score = base + group_bonus + TITLE_WORD_BONUS * shared_title as f64;

            RelationshipSuggestion {
                spec_id: candidate.id.clone(),
                score: score.min(1.0),
                reason: reason(current, same_group, shared_title, base),
                relationship_type: RELATED.to_string(),
            }
        })
        .filter(|s| s.score >= options.min_score)
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.spec_id.cmp(&b.spec_id)));
    suggestions.truncate(options.limit);
    suggestions
}

/// Suggests the best parent for `current`, if any candidate clears `threshold`.
///
/// Hierarchies and cycles are not validated.
#[must_use]
pub fn suggest_parent(
    current: &SpecCandidate,
    candidates: &[SpecCandidate],
    threshold: f64,
) -> Option<RelationshipSuggestion> {
    let options = RankOptions { min_score: threshold, limit: 1 };
    rank_related(current, candidates, &options).into_iter().next().map(|mut suggestion| {
        suggestion.relationship_type = PARENT.to_string();
        suggestion.reason = format!("Likely parent: {}", suggestion.reason);
        suggestion
    })
}

fn content_of(spec: &SpecCandidate) -> String {
    format!("{}\n{}", spec.title, spec.body_md)
}

fn title_words(title: &str) -> HashSet<String> {
    title.split_whitespace().map(str::to_lowercase).collect()
}

fn reason(current: &SpecCandidate, same_group: bool, shared_title: usize, base: f64) -> String {
    let words = if shared_title == 1 { "word" } else { "words" };
    match (same_group, shared_title > 0) {
        (true, true) => format!(
            "Same {} feature group and {shared_title} shared title {words}",
            current.feature_group
        ),
        (true, false) => {
            format!("Same {} feature group with related content", current.feature_group)
        }
        (false, true) => format!("{shared_title} shared title {words} and related content"),
        (false, false) => format!("Related content (keyword similarity {base:.2})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::FeatureGroup;

    fn candidate(id: &str, title: &str, body: &str, group: FeatureGroup) -> SpecCandidate {
        SpecCandidate {
            id: id.to_string(),
            title: title.to_string(),
            body_md: body.to_string(),
            feature_group: group,
        }
    }

    #[test]
    fn identical_sets_score_one() {
        let a: BTreeSet<String> = ["token".to_string(), "session".to_string()].into();
        assert!((keyword_similarity(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sets_score_zero() {
        assert!(keyword_similarity(&BTreeSet::new(), &BTreeSet::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn distinctive_overlap_adds_bonus() {
        let plain = similarity("alpha bravo charlie", "alpha delta echo");
        let compound = similarity("alpha-one bravo charlie", "alpha-one delta echo");
        assert!((plain - 0.2).abs() < 1e-9);
        assert!((compound - 0.3).abs() < 1e-9);
    }

    #[test]
    fn same_group_outranks_different_group_with_equal_overlap() {
        let current = candidate("cur", "One", "tokens sessions refresh", FeatureGroup::Auth);
        let same = candidate("a", "Two", "tokens sessions refresh", FeatureGroup::Auth);
        let other = candidate("b", "Three", "tokens sessions refresh", FeatureGroup::Ui);

        let ranked =
            rank_related(&current, &[other, same], &RankOptions { min_score: 0.0, limit: 10 });
        assert_eq!(ranked[0].spec_id, "a");
        assert!(ranked[0].score > ranked[1].score);
        assert!(ranked[0].reason.starts_with("Same auth feature group"));
    }

    #[test]
    fn title_overlap_bonus_and_reason() {
        let current = candidate("cur", "Invoice export", "csv files", FeatureGroup::Api);
        let cand = candidate("x", "Invoice export", "pdf reports", FeatureGroup::Data);
        let ranked = rank_related(&current, &[cand], &RankOptions { min_score: 0.0, limit: 10 });
        assert_eq!(ranked[0].reason, "2 shared title words and related content");
        assert!(ranked[0].score >= 0.2);
    }

    #[test]
    fn drops_low_scores_skips_self_and_truncates() {
        let current =
            candidate("cur", "Billing", "stripe invoices refunds", FeatureGroup::Integration);
        let candidates = vec![
            current.clone(),
            candidate("c", "Billing retries", "stripe invoices refunds", FeatureGroup::Integration),
            candidate("b", "Billing alerts", "stripe invoices refunds", FeatureGroup::Integration),
            candidate("z", "Unrelated", "garden flowers", FeatureGroup::General),
        ];
        let ranked = rank_related(&current, &candidates, &RankOptions { min_score: 0.2, limit: 1 });
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].spec_id, "b");

        let all = rank_related(&current, &candidates, &RankOptions::default());
        assert!(all.iter().all(|s| s.spec_id != "cur" && s.spec_id != "z"));
    }

    #[test]
    fn scores_are_capped_at_one() {
        let current = candidate("cur", "a b c d e f", "same words here", FeatureGroup::Ui);
        let cand = candidate("x", "a b c d e f", "same words here", FeatureGroup::Ui);
        let ranked = rank_related(&current, &[cand], &RankOptions::default());
        assert!((ranked[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parent_requires_higher_threshold() {
        let current = candidate("cur", "Reset flow", "password reset emails", FeatureGroup::Auth);
        let weak = candidate("w", "Profile", "password rules", FeatureGroup::Ui);
        assert!(suggest_parent(&current, &[weak.clone()], DEFAULT_PARENT_THRESHOLD).is_none());

        let strong =
            candidate("s", "Password reset", "password reset emails tokens", FeatureGroup::Auth);
        let parent = suggest_parent(&current, &[weak, strong], DEFAULT_PARENT_THRESHOLD).unwrap();
        assert_eq!(parent.spec_id, "s");
        assert_eq!(parent.relationship_type, "parent");
        assert!(parent.reason.starts_with("Likely parent:"));
    }
}
