//! Single-line labeled field scanning.
//!
//! Documents carry optional metadata as `**LABEL:** value` lines (the
//! plain `LABEL: value` form is accepted too). Labels are matched
//! case-insensitively against a fixed alias table; the first occurrence
//! of a field wins and later ones are ignored.

use std::collections::HashMap;

/// Alias table: (label as written, canonical field key).
const LABELS: &[(&str, &str)] = &[
    ("category", "category"),
    ("quality score", "quality"),
    ("quality", "quality"),
    ("applicability", "applicability"),
    ("status", "status"),
    ("source", "source"),
    ("domain", "domain"),
    ("region", "region"),
    ("language", "language"),
    ("created", "created"),
    ("updated", "updated"),
    ("related patterns", "related"),
    ("related", "related"),
    ("dependencies", "depends"),
    ("depends", "depends"),
    ("supersedes", "supersedes"),
    ("superseded-by", "superseded_by"),
    ("superseded by", "superseded_by"),
];

/// First-match-wins map of canonical field key to raw value.
pub struct FieldMap {
    values: HashMap<&'static str, String>,
}

impl FieldMap {
    /// Scan every line of a document for labeled fields.
    pub fn scan(raw: &str) -> Self {
        let mut values = HashMap::new();
        for line in raw.lines() {
            if let Some((key, value)) = labeled_value(line) {
                values.entry(key).or_insert(value);
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Match one line against the alias table, in either label form.
fn labeled_value(line: &str) -> Option<(&'static str, String)> {
    let trimmed = line.trim();
    // ASCII lowercase preserves byte offsets, so prefix lengths computed
    // on the lowered copy index safely into the original.
    let lowered = trimmed.to_ascii_lowercase();
    for (label, key) in LABELS {
        let bold = format!("**{label}:**");
        let plain = format!("{label}:");
        let value_start = if lowered.starts_with(&bold) {
            bold.len()
        } else if lowered.starts_with(&plain) {
            plain.len()
        } else {
            continue;
        };
        return Some((key, trimmed[value_start..].trim().to_string()));
    }
    None
}
