//! Pattern identity types.
//!
//! A pattern is identified by a three-part dash-joined token of the form
//! `Pattern-<TAG>-<NNN>`, e.g. `Pattern-API-001`. The token doubles as the
//! file stem of the source document, so parsing preserves the case found
//! on disk, while [`PatternId::canonical`] normalizes tokens discovered in
//! free text (tag uppercased) so the same reference always deduplicates to
//! one form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated pattern identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(String);

impl PatternId {
    /// Parse and validate an identifier, preserving its case.
    ///
    /// Returns `None` when the token does not match the
    /// `Pattern-<TAG>-<NNN>` shape.
    pub fn parse(s: &str) -> Option<Self> {
        if is_valid(s) {
            Some(PatternId(s.to_string()))
        } else {
            None
        }
    }

    /// Parse an identifier into its canonical form: `Pattern-` prefix,
    /// category tag uppercased, numeric suffix preserved.
    ///
    /// Used for tokens found in document bodies and relationship lines,
    /// where authors write IDs in whatever case they please.
    pub fn canonical(s: &str) -> Option<Self> {
        if !is_valid(s) {
            return None;
        }
        let mut parts = s.split('-');
        let _prefix = parts.next()?;
        let tag = parts.next()?;
        let suffix = parts.next()?;
        Some(PatternId(format!(
            "Pattern-{}-{}",
            tag.to_ascii_uppercase(),
            suffix
        )))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The middle category tag, e.g. `API` in `Pattern-API-001`.
    pub fn category_tag(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or("")
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check the `Pattern-<TAG>-<NNN>` shape: exactly three dash-joined
/// segments, a case-insensitive `Pattern` prefix, an alphanumeric tag,
/// and an all-digit suffix.
fn is_valid(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    let (prefix, tag, suffix) = (parts[0], parts[1], parts[2]);
    prefix.eq_ignore_ascii_case("pattern")
        && !tag.is_empty()
        && tag.chars().all(|c| c.is_ascii_alphanumeric())
        && !suffix.is_empty()
        && suffix.chars().all(|c| c.is_ascii_digit())
}
