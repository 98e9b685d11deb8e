//! Relationship parsing: labeled ID lists and body-wide cross-links.

use pidx_common::PatternId;
use regex::Regex;

/// Parse a comma/semicolon-separated list of pattern IDs from a labeled
/// line value. Non-conforming tokens are dropped, not errors: authors
/// hand-write these lists and a typo should not poison the record.
pub fn parse_id_list(value: &str) -> Vec<PatternId> {
    value
        .split([',', ';'])
        .filter_map(|token| PatternId::canonical(token.trim()))
        .collect()
}

/// Parse a single-ID value, e.g. from a `**SUPERSEDES:**` line.
/// Invalid values become absent, not errors.
pub fn parse_single_id(value: &str) -> Option<PatternId> {
    PatternId::canonical(value.trim())
}

/// Collect every pattern ID mentioned anywhere in the body, canonicalized
/// and deduplicated in first-occurrence order. The record's own ID is
/// excluded: a document trivially mentions itself in its heading.
pub fn scan_cross_links(body: &str, own_id: &PatternId, id_token: &Regex) -> Vec<PatternId> {
    let own_canonical = PatternId::canonical(own_id.as_str());
    let mut seen = Vec::new();
    for m in id_token.find_iter(body) {
        if let Some(id) = PatternId::canonical(m.as_str()) {
            if Some(&id) == own_canonical.as_ref() || seen.contains(&id) {
                continue;
            }
            seen.push(id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::id_token_regex;

    fn id(s: &str) -> PatternId {
        PatternId::parse(s).unwrap()
    }

    #[test]
    fn id_list_splits_on_commas_and_semicolons() {
        let ids = parse_id_list("Pattern-API-001, Pattern-AUTH-002; Pattern-DB-003");
        assert_eq!(
            ids,
            vec![
                id("Pattern-API-001"),
                id("Pattern-AUTH-002"),
                id("Pattern-DB-003")
            ]
        );
    }

    #[test]
    fn id_list_drops_invalid_tokens() {
        let ids = parse_id_list("Pattern-API-001, see docs, Pattern-BAD, Pattern-OK-002");
        assert_eq!(ids, vec![id("Pattern-API-001"), id("Pattern-OK-002")]);
    }

    #[test]
    fn single_id_invalid_becomes_absent() {
        assert_eq!(parse_single_id("  Pattern-API-001 "), Some(id("Pattern-API-001")));
        assert_eq!(parse_single_id("not an id"), None);
        assert_eq!(parse_single_id(""), None);
    }

    #[test]
    fn cross_links_are_canonical_and_deduplicated() {
        let re = id_token_regex();
        let body = "Uses pattern-auth-001 and Pattern-AUTH-001 plus Pattern-DB-002.";
        let links = scan_cross_links(body, &id("Pattern-API-001"), &re);
        assert_eq!(links, vec![id("Pattern-AUTH-001"), id("Pattern-DB-002")]);
    }

    #[test]
    fn cross_links_exclude_own_id() {
        let re = id_token_regex();
        let body = "# Pattern-API-001\nRelates to Pattern-AUTH-001 and Pattern-API-001.";
        let links = scan_cross_links(body, &id("Pattern-API-001"), &re);
        assert_eq!(links, vec![id("Pattern-AUTH-001")]);
    }
}
