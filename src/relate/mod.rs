//! Relationship suggestions between specs.

pub mod keywords;
pub mod score;

pub use keywords::extract_keywords;
pub use score::{
    keyword_similarity, rank_related, similarity, suggest_parent, RankOptions,
    DEFAULT_LIMIT, DEFAULT_MIN_SCORE, DEFAULT_PARENT_THRESHOLD,
};
