//! Requirement analyzer: free text to [`RequirementProfile`].
//!
//! Classification is keyword-table driven and total: any input, including
//! the empty string, produces a profile.

use std::collections::HashSet;

use crate::spec::{Complexity, FeatureGroup, RequirementProfile};

/// Terms kept as keywords regardless of length.
const TECH_VOCABULARY: &[&str] = &[
    "auth",
    "database",
    "api",
    "ui",
    "frontend",
    "backend",
    "integration",
    "component",
    "service",
    "model",
    "controller",
    "migration",
    "test",
    "endpoint",
    "schema",
    "jwt",
    "login",
    "security",
    "dashboard",
    "webhook",
    "mcp",
    "cache",
    "queue",
    "oauth",
];

/// Group detection table, checked in order; the first intersecting list wins.
const GROUP_KEYWORDS: [(FeatureGroup, &[&str]); 5] = [
    (FeatureGroup::Auth, &["auth", "login", "security", "jwt"]),
    (FeatureGroup::Ui, &["ui", "component", "frontend", "dashboard"]),
    (FeatureGroup::Api, &["api", "endpoint", "service", "backend"]),
    (FeatureGroup::Data, &["database", "model", "migration", "schema"]),
    (FeatureGroup::Integration, &["mcp", "integration", "external", "webhook"]),
];

const COMPLEXITY_MARKERS: &[&str] = &["system", "architecture", "complex"];

const MAX_KEYWORDS: usize = 10;
const TITLE_WORDS: usize = 8;
const MIN_FREE_KEYWORD_LEN: usize = 5;
const MODERATE_TEXT_LEN: usize = 200;
const MODERATE_KEYWORDS: usize = 6;
const COMPLEX_TEXT_LEN: usize = 500;

/// Title used when the request has no usable words.
pub const UNTITLED: &str = "Untitled Specification";

/// Classifies a free-text feature request.
#[must_use]
pub fn analyze(text: &str) -> RequirementProfile {
    let tokens = tokenize(text);
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let keywords = select_keywords(&tokens);
    let detected_group = detect_group(&token_set);
    let complexity = estimate_complexity(text, &token_set, keywords.len());

    RequirementProfile {
        title: derive_title(text),
        keywords,
        detected_group,
        detected_theme: detected_group.theme(),
        complexity,
    }
}

/// Lowercase whitespace tokens with surrounding punctuation trimmed.
///
/// Hyphens survive so that terms like `nice-to-have` stay whole.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let lower = raw.to_lowercase();
            let trimmed = lower.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

fn derive_title(text: &str) -> String {
    let words: Vec<String> = text
        .split_whitespace()
        .take(TITLE_WORDS)
        .map(|word| word.chars().filter(|c| c.is_alphanumeric() || *c == '-').collect::<String>())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        UNTITLED.to_string()
    } else {
        words.join(" ")
    }
}

fn select_keywords(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| {
            TECH_VOCABULARY.contains(&t.as_str()) || t.chars().count() >= MIN_FREE_KEYWORD_LEN
        })
        .filter(|t| seen.insert(t.as_str()))
        .take(MAX_KEYWORDS)
        .cloned()
        .collect()
}

fn detect_group(tokens: &HashSet<&str>) -> FeatureGroup {
    GROUP_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| tokens.contains(w)))
        .map_or(FeatureGroup::General, |(group, _)| *group)
}

fn estimate_complexity(text: &str, tokens: &HashSet<&str>, keyword_count: usize) -> Complexity {
    let length = text.chars().count();
    if length > COMPLEX_TEXT_LEN || COMPLEXITY_MARKERS.iter().any(|m| tokens.contains(m)) {
        Complexity::Complex
    } else if length > MODERATE_TEXT_LEN || keyword_count > MODERATE_KEYWORDS {
        Complexity::Moderate
    } else {
        Complexity::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ThemeCategory;

    #[test]
    fn jwt_login_request_is_auth() {
        let profile = analyze("User login with JWT tokens and password reset");
        assert_eq!(profile.detected_group, FeatureGroup::Auth);
        assert_eq!(profile.detected_theme, ThemeCategory::Backend);
        assert!(profile.keywords.contains(&"login".to_string()));
        assert!(profile.keywords.contains(&"jwt".to_string()));
        assert_eq!(profile.complexity, Complexity::Simple);
    }

    #[test]
    fn empty_input_is_general_and_simple() {
        let profile = analyze("");
        assert_eq!(profile.detected_group, FeatureGroup::General);
        assert_eq!(profile.detected_theme, ThemeCategory::General);
        assert!(profile.keywords.is_empty());
        assert_eq!(profile.complexity, Complexity::Simple);
        assert_eq!(profile.title, UNTITLED);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Dashboard component showing webhook delivery stats";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn long_text_is_complex() {
        let text = "word ".repeat(101);
        assert!(text.len() > 500);
        assert_eq!(analyze(&text).complexity, Complexity::Complex);
    }

    #[test]
    fn architecture_marker_escalates_short_text() {
        assert_eq!(analyze("Rework the plugin architecture").complexity, Complexity::Complex);
    }

    #[test]
    fn many_keywords_make_request_moderate() {
        let profile = analyze("caching layer improves latency across regions without stale reads");
        assert!(profile.keywords.len() > 6);
        assert_eq!(profile.complexity, Complexity::Moderate);
    }

    #[test]
    fn group_priority_prefers_auth_over_ui() {
        let profile = analyze("Dashboard that requires login");
        assert_eq!(profile.detected_group, FeatureGroup::Auth);
    }

    #[test]
    fn integration_group_matches_external_keyword() {
        let profile = analyze("Sync with an external CRM");
        assert_eq!(profile.detected_group, FeatureGroup::Integration);
        assert_eq!(profile.detected_theme, ThemeCategory::Integration);
    }

    #[test]
    fn trailing_punctuation_does_not_hide_group_keywords() {
        let profile = analyze("Add a new API, please.");
        assert_eq!(profile.detected_group, FeatureGroup::Api);
    }

    #[test]
    fn keywords_are_deduplicated_and_capped() {
        let text = "alpha1 alpha1 bravo2 charlie delta1 echo1 foxtrot golf1 hotel1 india1 \
                    juliet kilo1 lima1";
        let profile = analyze(text);
        assert_eq!(profile.keywords.len(), 10);
        assert_eq!(profile.keywords[0], "alpha1");
        assert_eq!(profile.keywords[1], "bravo2");
        assert!(!profile.keywords.contains(&"kilo1".to_string()));
    }

    #[test]
    fn title_keeps_case_and_hyphens_and_stops_at_eight_words() {
        let profile =
            analyze("Real-time Chat: typing indicators, read receipts & presence for all users!");
        // "&" is one of the eight words but strips to nothing.
        assert_eq!(profile.title, "Real-time Chat typing indicators read receipts presence");
    }
}
