//! Spec store port consumed by the execution engine.

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// The parts of a stored spec the engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSpec {
    /// Spec identifier.
    pub id: String,
    /// Spec title.
    pub title: String,
    /// Markdown body.
    pub body_md: String,
}

/// Reads and rewrites spec bodies.
///
/// Both calls are fallible and idempotent from the caller's view:
/// writing the same body twice is harmless. Implementations that need
/// mutual exclusion between concurrent runs must provide it themselves.
pub trait SpecRepository: Send + Sync {
    /// Fetches a spec by ID, `Ok(None)` when it does not exist.
    fn get_spec<'a>(&'a self, id: &'a str) -> PortFuture<'a, Option<StoredSpec>>;

    /// Replaces the markdown body of a spec.
    fn update_spec<'a>(&'a self, id: &'a str, body_md: &'a str) -> PortFuture<'a, ()>;
}
