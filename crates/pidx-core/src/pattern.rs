//! The pattern record and its classification metadata.
//!
//! A [`Pattern`] is one structured knowledge record, extracted from a
//! single source document. Records are immutable after load: the store
//! hands out shared references and no mutation path exists post-load,
//! so they are safe to share across threads without locks.

use chrono::{DateTime, Utc};
use pidx_common::PatternId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lifecycle status of a pattern record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatternStatus {
    /// In active use; the widest default when a document says nothing.
    #[default]
    Active,
    /// Still loaded but discouraged for new work.
    Deprecated,
    /// Not yet finalized.
    Draft,
    /// Replaced by a newer pattern (see `superseded_by`).
    Superseded,
}

impl PatternStatus {
    /// Parse a status label, case-insensitively. Unknown labels map to
    /// `None` so the extractor can fall back to the default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "deprecated" => Some(Self::Deprecated),
            "draft" => Some(Self::Draft),
            "superseded" => Some(Self::Superseded),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Deprecated => write!(f, "deprecated"),
            Self::Draft => write!(f, "draft"),
            Self::Superseded => write!(f, "superseded"),
        }
    }
}

/// A single structured knowledge record.
///
/// Relationship fields hold IDs, not references: the store is an arena
/// keyed by ID, and every traversal dereferences through it so that
/// dangling references (forward references to never-loaded or deleted
/// patterns) degrade to skipped edges rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Globally unique, stable identifier derived from the file stem.
    pub id: PatternId,

    /// Display name, from the first `#` heading.
    pub name: String,

    /// Free-text category label.
    pub category: String,

    /// Short summary: first paragraph of the Context section, capped.
    pub description: String,

    /// Lowercase search tokens from name, category, and body.
    #[serde(default)]
    pub keywords: BTreeSet<String>,

    /// Curated list of related pattern IDs, as declared.
    #[serde(default)]
    pub related_patterns: Vec<PatternId>,

    /// Patterns that must be understood/applied before this one.
    #[serde(default)]
    pub dependencies: Vec<PatternId>,

    /// The pattern this one replaces, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub supersedes: Option<PatternId>,

    /// The pattern that replaces this one, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub superseded_by: Option<PatternId>,

    /// Every pattern ID mentioned anywhere in the body, deduplicated.
    /// Independent of (and typically a superset of) `related_patterns`.
    #[serde(default)]
    pub cross_links: Vec<PatternId>,

    /// Classification metadata; no structural impact on traversal.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<String>,

    #[serde(default)]
    pub status: PatternStatus,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quality_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub applicability: Option<String>,

    /// Provenance label, e.g. the team or document that produced this.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// SHA-256 hex digest of the raw source body, for change detection
    /// by consumers. Stable across reloads of identical content.
    pub content_hash: String,
}

impl Pattern {
    /// Create a record with the widest-possible defaults. The extractor
    /// starts from this and fills in whatever the document provides, so
    /// the missing-field-means-default policy lives in one place.
    pub fn with_defaults(id: PatternId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            description: format!("{name} pattern"),
            name,
            category: String::from("general"),
            keywords: BTreeSet::new(),
            related_patterns: Vec::new(),
            dependencies: Vec::new(),
            supersedes: None,
            superseded_by: None,
            cross_links: Vec::new(),
            domain: None,
            region: None,
            language: None,
            status: PatternStatus::Active,
            quality_score: None,
            applicability: None,
            source: None,
            created_at: None,
            updated_at: None,
            content_hash: String::new(),
        }
    }
}
