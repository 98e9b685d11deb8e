//! Graph traversal over the relationship edges embedded in records.
//!
//! Four independent read-only algorithms share the same edge sets
//! (`related_patterns`, `dependencies`, `cross_links`, `superseded_by`).
//! Any of these graphs may legitimately contain cycles, so every walk
//! carries a visited-set and terminates by construction. Dangling IDs
//! (no matching record in the store) are silently skipped when
//! dereferenced, never an error.

use crate::pattern::Pattern;
use crate::store::PatternStore;
use pidx_common::PatternId;
use std::collections::{HashSet, VecDeque};

/// One neighbor found by [`find_related`]: a record and its BFS distance
/// from the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedHit<'a> {
    pub pattern: &'a Pattern,
    pub distance: usize,
}

/// Options for [`find_related`].
#[derive(Debug, Clone, Copy)]
pub struct RelatedOptions {
    /// How many hops out from the seed to explore.
    pub max_depth: usize,
    /// Whether body-discovered `cross_links` count as neighbor edges
    /// alongside the curated `related_patterns`. On by default; turn
    /// off for curated-only discovery.
    pub include_cross_links: bool,
}

impl Default for RelatedOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            include_cross_links: true,
        }
    }
}

/// Bounded breadth-first neighbor discovery.
///
/// The seed itself is never emitted. Results come back sorted by
/// ascending distance, nearest neighbors first.
pub fn find_related<'a>(
    store: &'a PatternStore,
    id: &PatternId,
    opts: RelatedOptions,
) -> Vec<RelatedHit<'a>> {
    let mut visited: HashSet<PatternId> = HashSet::new();
    let mut queue: VecDeque<(PatternId, usize)> = VecDeque::new();
    let mut hits: Vec<RelatedHit<'a>> = Vec::new();

    queue.push_back((id.clone(), 0));
    while let Some((current, distance)) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue; // cycle guard
        }
        let Some(pattern) = store.get(&current) else {
            continue; // dangling reference
        };
        if distance > 0 {
            hits.push(RelatedHit { pattern, distance });
        }
        if distance == opts.max_depth {
            continue;
        }
        let curated = pattern.related_patterns.iter();
        let discovered = pattern
            .cross_links
            .iter()
            .filter(|_| opts.include_cross_links);
        for next in curated.chain(discovered) {
            if !visited.contains(next) {
                queue.push_back((next.clone(), distance + 1));
            }
        }
    }

    // BFS already yields ascending distance; the stable sort is a
    // contract guarantee, not a reordering.
    hits.sort_by_key(|hit| hit.distance);
    hits
}

/// Post-order depth-first dependency resolution.
///
/// Returns the reachable dependency subgraph in application order: a
/// record never appears before something it depends on (a correct
/// topological order when the subgraph is acyclic). The seed is
/// excluded; cycles are tolerated and simply stop the walk.
pub fn find_dependencies<'a>(store: &'a PatternStore, id: &PatternId) -> Vec<&'a Pattern> {
    let mut visited: HashSet<PatternId> = HashSet::new();
    let mut ordered: Vec<&'a Pattern> = Vec::new();

    // Pre-mark the seed so it is neither emitted nor re-entered via a
    // dependency cycle.
    visited.insert(id.clone());
    if let Some(seed) = store.get(id) {
        for dep in &seed.dependencies {
            visit_dependency(store, dep, &mut visited, &mut ordered);
        }
    }
    ordered
}

fn visit_dependency<'a>(
    store: &'a PatternStore,
    id: &PatternId,
    visited: &mut HashSet<PatternId>,
    ordered: &mut Vec<&'a Pattern>,
) {
    if !visited.insert(id.clone()) {
        return;
    }
    let Some(pattern) = store.get(id) else {
        return;
    };
    for dep in &pattern.dependencies {
        visit_dependency(store, dep, visited, ordered);
    }
    ordered.push(pattern);
}

/// Walk the supersession chain from `id` to its final replacement.
///
/// Returns the last record in the chain — the seed itself when it was
/// never superseded. A cyclic or broken chain is detectable but not
/// resolvable, so it returns `None` rather than looping or failing.
pub fn find_superseded_by<'a>(store: &'a PatternStore, id: &PatternId) -> Option<&'a Pattern> {
    let mut visited: HashSet<PatternId> = HashSet::new();
    let mut current = store.get(id)?;
    loop {
        if !visited.insert(current.id.clone()) {
            return None; // cycle
        }
        match &current.superseded_by {
            None => return Some(current),
            Some(next) => match store.get(next) {
                Some(pattern) => current = pattern,
                None => return None, // broken chain
            },
        }
    }
}

/// Reverse-edge ripple detection: every record that references `id`
/// through any relationship field.
///
/// Single linear pass in store order; each record appears at most once
/// even when it matches on several fields.
pub fn detect_ripple_effects<'a>(store: &'a PatternStore, id: &PatternId) -> Vec<&'a Pattern> {
    store
        .all()
        .iter()
        .filter(|p| p.id != *id)
        .filter(|p| {
            p.dependencies.contains(id)
                || p.related_patterns.contains(id)
                || p.cross_links.contains(id)
                || p.superseded_by.as_ref() == Some(id)
        })
        .collect()
}
