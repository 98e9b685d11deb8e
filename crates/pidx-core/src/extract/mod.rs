//! Record extraction: one source document in, one validated [`Pattern`] out.
//!
//! Extraction is deliberately forgiving. The only hard failures are a
//! filename that does not encode a pattern ID ([`Error::NotAPatternFile`],
//! which callers treat as "skip this file") and content that cannot yield
//! even a defaults record ([`Error::MalformedContent`]: empty or binary).
//! Everything else degrades field by field: a missing label means the
//! default, a bad relationship token is dropped, an unknown status maps
//! to `Active`. A half-written document still becomes a usable record.
//!
//! Structured fields are read from single-line labels in either the
//! `**LABEL:** value` or `LABEL: value` form, case-insensitively, first
//! match wins.

mod fields;
mod keywords;
mod links;

pub use keywords::tokenize;

use crate::pattern::{Pattern, PatternStatus};
use chrono::{DateTime, Utc};
use fields::FieldMap;
use pidx_common::{Error, PatternId, Result};
use regex::Regex;
use sha2::{Digest, Sha256};

/// Token shape of a pattern ID as it appears in free text.
const ID_TOKEN_PATTERN: &str = r"(?i)\bPattern-[A-Za-z0-9]+-[0-9]+\b";

/// Maximum description length, in characters.
const DESCRIPTION_CAP: usize = 240;

/// Recognized source-document extensions.
const EXTENSIONS: &[&str] = &["md", "markdown"];

pub(crate) fn id_token_regex() -> Regex {
    Regex::new(ID_TOKEN_PATTERN).unwrap()
}

/// Turns `(filename, raw text)` pairs into [`Pattern`] records.
///
/// Holds its compiled regexes; build one and reuse it across a whole
/// directory load.
pub struct Extractor {
    id_token: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            id_token: id_token_regex(),
        }
    }

    /// Extract a pattern record from one document.
    ///
    /// The filename must be `<Pattern-TAG-NNN>.<md|markdown>`; the ID is
    /// taken from the stem with its case preserved.
    pub fn extract(&self, file_name: &str, raw: &str) -> Result<Pattern> {
        let id = parse_file_name(file_name)
            .ok_or_else(|| Error::NotAPatternFile(file_name.to_string()))?;

        if raw.trim().is_empty() || raw.contains('\0') {
            return Err(Error::MalformedContent {
                file: file_name.to_string(),
                reason: "empty or binary document".to_string(),
            });
        }

        let name = first_heading(raw).unwrap_or_else(|| id.as_str().to_string());
        let mut pattern = Pattern::with_defaults(id, name);

        let fields = FieldMap::scan(raw);

        if let Some(category) = fields.get("category") {
            pattern.category = category.to_string();
        }
        if let Some(desc) = context_description(raw) {
            pattern.description = desc;
        }

        pattern.status = fields
            .get("status")
            .and_then(PatternStatus::parse)
            .unwrap_or_default();
        pattern.quality_score = fields
            .get("quality")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|q| q.is_finite());
        pattern.applicability = fields.get("applicability").map(str::to_string);
        pattern.source = fields.get("source").map(str::to_string);
        pattern.domain = fields.get("domain").map(str::to_string);
        pattern.region = fields.get("region").map(str::to_string);
        pattern.language = fields.get("language").map(str::to_string);
        pattern.created_at = fields.get("created").and_then(parse_timestamp);
        pattern.updated_at = fields.get("updated").and_then(parse_timestamp);

        pattern.related_patterns = fields
            .get("related")
            .map(links::parse_id_list)
            .unwrap_or_default();
        pattern.dependencies = fields
            .get("depends")
            .map(links::parse_id_list)
            .unwrap_or_default();
        pattern.supersedes = fields.get("supersedes").and_then(links::parse_single_id);
        pattern.superseded_by = fields
            .get("superseded_by")
            .and_then(links::parse_single_id);

        pattern.cross_links = links::scan_cross_links(raw, &pattern.id, &self.id_token);

        let keyword_source = format!("{} {} {}", pattern.name, pattern.category, raw);
        pattern.keywords = tokenize(&keyword_source);

        pattern.content_hash = sha256_hex(raw.as_bytes());

        Ok(pattern)
    }
}

/// Parse `<id>.<ext>` from a filename; `None` means "not a pattern file".
fn parse_file_name(file_name: &str) -> Option<PatternId> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if !EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
        return None;
    }
    PatternId::parse(stem)
}

/// First `# ` heading line, trimmed.
fn first_heading(raw: &str) -> Option<String> {
    raw.lines()
        .map(str::trim)
        .find(|line| line.starts_with("# "))
        .map(|line| line[2..].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// First paragraph of the `Context` section, capped to a short summary.
fn context_description(raw: &str) -> Option<String> {
    let mut lines = raw.lines().map(str::trim);
    lines.find(|line| is_context_heading(line))?;

    let mut paragraph: Vec<&str> = Vec::new();
    for line in lines {
        if line.is_empty() {
            if paragraph.is_empty() {
                continue; // blank lines between heading and paragraph
            }
            break;
        }
        if line.starts_with('#') {
            break;
        }
        paragraph.push(line);
    }

    if paragraph.is_empty() {
        return None;
    }
    Some(cap_chars(&paragraph.join(" "), DESCRIPTION_CAP))
}

fn is_context_heading(line: &str) -> bool {
    let stripped = line.trim_start_matches('#').trim();
    line.starts_with('#') && stripped.eq_ignore_ascii_case("context")
}

/// Truncate to at most `cap` characters, on a char boundary.
fn cap_chars(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

/// Accept RFC 3339 timestamps; anything else becomes absent.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Compute SHA-256 hex digest.
fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
