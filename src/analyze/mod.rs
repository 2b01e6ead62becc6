//! Free-text classification of feature requests.
//!
//! [`requirement::analyze`] turns a request into a [`RequirementProfile`];
//! [`priority`] holds the two independent priority rules.
//!
//! [`RequirementProfile`]: crate::spec::RequirementProfile

pub mod priority;
pub mod requirement;

pub use priority::{intake_priority, triage_priority};
pub use requirement::analyze;
