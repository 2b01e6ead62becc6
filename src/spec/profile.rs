//! Requirement classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse subsystem category a feature request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    /// Authentication, sessions and access control.
    Auth,
    /// User-facing components and screens.
    Ui,
    /// Endpoints and backend services.
    Api,
    /// Schemas, models and migrations.
    Data,
    /// External systems, webhooks and MCP.
    Integration,
    /// Anything that matched no other group.
    #[default]
    General,
}

impl FeatureGroup {
    /// Every group, in classification priority order.
    pub const ALL: [Self; 6] =
        [Self::Auth, Self::Ui, Self::Api, Self::Data, Self::Integration, Self::General];

    /// Lowercase name as stored in document metadata.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Ui => "ui",
            Self::Api => "api",
            Self::Data => "data",
            Self::Integration => "integration",
            Self::General => "general",
        }
    }

    /// Theme category derived from this group.
    #[must_use]
    pub fn theme(self) -> ThemeCategory {
        match self {
            Self::Auth | Self::Api | Self::Data => ThemeCategory::Backend,
            Self::Ui => ThemeCategory::Frontend,
            Self::Integration => ThemeCategory::Integration,
            Self::General => ThemeCategory::General,
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary classification axis derived from the feature group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeCategory {
    /// Server-side work.
    Backend,
    /// Client-side work.
    Frontend,
    /// Work that crosses a system boundary.
    Integration,
    /// Unclassified.
    #[default]
    General,
}

impl ThemeCategory {
    /// Lowercase name as stored in document metadata.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Integration => "integration",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough size of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// Short, focused request.
    Simple,
    /// Longer request or one with many technical terms.
    Moderate,
    /// System-level or very long request.
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        })
    }
}

/// Structured metadata extracted from a free-text feature request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Short title derived from the first words of the request.
    pub title: String,
    /// Up to ten keywords in first-occurrence order.
    pub keywords: Vec<String>,
    /// Detected subsystem.
    pub detected_group: FeatureGroup,
    /// Theme derived from `detected_group`.
    pub detected_theme: ThemeCategory,
    /// Estimated size.
    pub complexity: Complexity,
}

/// Skeleton of an implementation plan derived from a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationPlanSpec {
    /// Ordered layer names; never empty.
    pub layers: Vec<String>,
    /// Number of tasks the task breakdown should contain.
    pub estimated_tasks: usize,
    /// Short label for the recommended approach (e.g. "security-first").
    pub recommended_approach: String,
}
