//! Keyword extraction for similarity scoring.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words that carry no topical signal.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "into", "are", "was", "were", "will",
    "would", "should", "could", "can", "has", "have", "had", "not", "but", "all", "any", "each",
    "its", "our", "your", "their", "you", "they", "them", "then", "than", "there", "these",
    "those", "what", "when", "where", "which", "who", "why", "how", "about", "also", "been",
    "being", "more", "most", "some", "such", "only", "other", "over", "under", "very", "just",
    "like", "use", "using", "used", "via", "per", "new", "add", "make", "must", "may", "might",
    "does", "did", "doing", "able", "etc",
];

static COMPOUND_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+[-_][a-z]+").expect("compound term pattern is valid"));

/// Extracts the keyword set of a text.
///
/// Lowercases, removes punctuation other than hyphens, and keeps
/// whitespace tokens longer than two characters that are not stop words,
/// numbers or bare punctuation. Compound terms such as `rate-limit` or
/// `user_id` are added whole from the lowercase text.
#[must_use]
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    let cleaned: String =
        lower.chars().filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-').collect();

    let mut keywords: BTreeSet<String> = cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
        .filter(|token| !STOP_WORDS.contains(token))
        .map(ToString::to_string)
        .collect();

    keywords.extend(COMPOUND_TERM.find_iter(&lower).map(|m| m.as_str().to_string()));
    keywords
}

/// Returns `true` for keywords that earn the compound bonus.
#[must_use]
pub fn is_distinctive(keyword: &str, long_len: usize) -> bool {
    keyword.contains('-') || keyword.contains('_') || keyword.chars().count() > long_len
}
