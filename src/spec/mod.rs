//! Specification document types.
//!
//! Defines the Rust types shared by the analyzer, formatter, parser,
//! relationship engine and store. Everything here is plain data.

mod document;
mod plan;
mod profile;
mod relation;

pub use document::{Priority, SpecDocument, SpecMetadata, SpecStatus};
pub use plan::{Layer, Task, TaskStatus};
pub use profile::{
    Complexity, FeatureGroup, ImplementationPlanSpec, RequirementProfile, ThemeCategory,
};
pub use relation::{RelationshipSuggestion, SpecCandidate};
