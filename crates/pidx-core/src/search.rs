//! Keyword-overlap search over the pattern store.
//!
//! Relevance is the fraction of query tokens found in a pattern's
//! keyword set, in [0.0, 1.0]. This is plain token overlap, O(patterns
//! x query tokens) — adequate for libraries in the tens-to-low-hundreds
//! of records and intentionally not a semantic search.

use crate::extract::tokenize;
use crate::pattern::Pattern;
use crate::store::PatternStore;
use std::cmp::Ordering;

/// One search result: a record and its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub pattern: &'a Pattern,
    /// Fraction of query tokens matched, in [0.0, 1.0].
    pub relevance: f64,
}

/// Rank patterns by keyword overlap with the query.
///
/// Zero-match patterns are excluded entirely. Results are sorted by
/// descending relevance; ties keep load order. An empty query or an
/// empty store yields an empty list, not an error.
pub fn search<'a>(store: &'a PatternStore, query: &str, top_n: usize) -> Vec<SearchHit<'a>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }
    let total = tokens.len() as f64;

    let mut hits: Vec<SearchHit<'a>> = store
        .all()
        .iter()
        .filter_map(|pattern| {
            let matched = tokens.iter().filter(|t| pattern.keywords.contains(*t)).count();
            (matched > 0).then(|| SearchHit {
                pattern,
                relevance: matched as f64 / total,
            })
        })
        .collect();

    // Stable sort keeps load order for equal scores.
    hits.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });
    hits.truncate(top_n);
    hits
}
