//! Stored specification documents.
//!
//! A document is a YAML front-matter block followed by the markdown body:
//!
//! ```text
//! ---
//! id: spec-1a2b3c4d
//! title: User login with JWT
//! feature_group: auth
//! ...
//! ---
//! # User login with JWT
//! ...
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::{FeatureGroup, ThemeCategory};
use super::relation::SpecCandidate;
use crate::error::{SpecflowError, SpecflowResult};

const FRONT_MATTER_FENCE: &str = "---";

/// Scheduling priority of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Do first.
    High,
    /// Normal work.
    #[default]
    Medium,
    /// Nice to have.
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// Lifecycle status of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpecStatus {
    /// Created, not yet worked on.
    #[default]
    Draft,
    /// Execution has started.
    Active,
    /// Every task completed.
    Completed,
    /// No longer relevant.
    Archived,
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        })
    }
}

/// Front-matter metadata of a spec document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecMetadata {
    /// Unique identifier (e.g. `spec-1a2b3c4d`).
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Subsystem category.
    pub feature_group: FeatureGroup,
    /// Theme derived from the group.
    pub theme_category: ThemeCategory,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: Priority,
    /// Lifecycle status.
    #[serde(default)]
    pub status: SpecStatus,
    /// Suggested parent spec, if any.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A spec document: metadata plus markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocument {
    /// Front-matter metadata.
    pub metadata: SpecMetadata,
    /// Markdown body (without front matter).
    pub body_md: String,
}

impl SpecDocument {
    /// Renders the document as front matter followed by the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be serialized.
    pub fn to_markdown(&self) -> SpecflowResult<String> {
        let yaml = serde_yaml::to_string(&self.metadata).map_err(|e| {
            SpecflowError::FrontMatter { id: self.metadata.id.clone(), reason: e.to_string() }
        })?;
        Ok(format!("{FRONT_MATTER_FENCE}\n{yaml}{FRONT_MATTER_FENCE}\n{}", self.body_md))
    }

    /// Parses a document previously written by [`SpecDocument::to_markdown`].
    ///
    /// `source` names the document in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter is missing, unterminated, or not valid metadata.
    pub fn from_markdown(source: &str, text: &str) -> SpecflowResult<Self> {
        let front_matter_error =
            |reason: String| SpecflowError::FrontMatter { id: source.to_string(), reason };

        let rest = text
            .strip_prefix(FRONT_MATTER_FENCE)
            .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
            .ok_or_else(|| front_matter_error("missing opening '---'".to_string()))?;

        let mut yaml_end = None;
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == FRONT_MATTER_FENCE {
                yaml_end = Some((offset, offset + line.len()));
                break;
            }
            offset += line.len();
        }
        let (yaml_end, body_start) =
            yaml_end.ok_or_else(|| front_matter_error("missing closing '---'".to_string()))?;

        let metadata: SpecMetadata = serde_yaml::from_str(&rest[..yaml_end])
            .map_err(|e| front_matter_error(e.to_string()))?;

        Ok(Self { metadata, body_md: rest[body_start..].to_string() })
    }

    /// Projects the document into the shape the relationship engine compares.
    #[must_use]
    pub fn to_candidate(&self) -> SpecCandidate {
        SpecCandidate {
            id: self.metadata.id.clone(),
            title: self.metadata.title.clone(),
            body_md: self.body_md.clone(),
            feature_group: self.metadata.feature_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> SpecDocument {
        let created = "2025-03-15T14:30:00Z".parse::<DateTime<Utc>>().unwrap();
        SpecDocument {
            metadata: SpecMetadata {
                id: "spec-0001".to_string(),
                title: "User login".to_string(),
                feature_group: FeatureGroup::Auth,
                theme_category: ThemeCategory::Backend,
                priority: Priority::High,
                status: SpecStatus::Draft,
                parent_id: None,
                created_at: created,
                updated_at: created,
            },
            body_md: "# User login\n\n---\n\nA horizontal rule above.\n".to_string(),
        }
    }

    #[test]
    fn markdown_round_trip_keeps_body_rules() {
        let doc = sample_document();
        let text = doc.to_markdown().unwrap();
        let parsed = SpecDocument::from_markdown("spec-0001", &text).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn missing_front_matter_is_an_error() {
        let err = SpecDocument::from_markdown("broken", "# Just a heading\n").unwrap_err();
        assert!(err.to_string().contains("missing opening"));
    }

    #[test]
    fn unterminated_front_matter_is_an_error() {
        let err = SpecDocument::from_markdown("broken", "---\nid: x\n").unwrap_err();
        assert!(err.to_string().contains("missing closing"));
    }

    #[test]
    fn priority_and_status_default_when_absent() {
        let text = "---\nid: spec-2\ntitle: T\nfeature_group: ui\ntheme_category: frontend\n\
                    created_at: 2025-01-01T00:00:00Z\n\
                    updated_at: 2025-01-01T00:00:00Z\n---\nbody\n";
        let doc = SpecDocument::from_markdown("spec-2", text).unwrap();
        assert_eq!(doc.metadata.priority, Priority::Medium);
        assert_eq!(doc.metadata.status, SpecStatus::Draft);
        assert_eq!(doc.body_md, "body\n");
    }
}
