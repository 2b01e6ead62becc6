//! Relationship suggestion types.

use serde::{Deserialize, Serialize};

use super::profile::FeatureGroup;

/// A spec as seen by the relationship engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecCandidate {
    /// Spec identifier.
    pub id: String,
    /// Spec title.
    pub title: String,
    /// Markdown body.
    pub body_md: String,
    /// Feature group from the spec metadata.
    pub feature_group: FeatureGroup,
}

/// A scored suggestion that a candidate relates to the current spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipSuggestion {
    /// The suggested spec.
    pub spec_id: String,
    /// Final score in `[0, 1]`.
    pub score: f64,
    /// Human-readable explanation of the score.
    pub reason: String,
    /// `"related"` or `"parent"`.
    pub relationship_type: String,
}
