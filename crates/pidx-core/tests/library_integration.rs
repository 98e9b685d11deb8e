//! End-to-end tests over a real on-disk pattern library.

use pidx_core::{
    detect_ripple_effects, export_graph, find_related, format_context, search, PatternId,
    PatternStore, RelatedOptions,
};
use std::fs;
use tempfile::TempDir;

const API_DOC: &str = "\
# API Gateway

**CATEGORY:** integration
**QUALITY SCORE:** 0.9
**RELATED:** Pattern-AUTH-001

## Context

Routes client requests to backend services behind one entry point,
delegating authentication to Pattern-AUTH-001.
";

const AUTH_DOC: &str = "\
# Token Authentication

**CATEGORY:** security

## Context

Issues and validates short-lived access tokens.
";

fn id(s: &str) -> PatternId {
    PatternId::parse(s).unwrap()
}

fn library() -> (TempDir, PatternStore) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Pattern-API-001.md"), API_DOC).unwrap();
    fs::write(dir.path().join("Pattern-AUTH-001.md"), AUTH_DOC).unwrap();
    let mut store = PatternStore::new();
    store.load(dir.path());
    (dir, store)
}

#[test]
fn load_then_related_then_ripple() {
    let (_dir, store) = library();
    assert_eq!(store.len(), 2);

    // The API pattern references AUTH both in its RELATED line and in
    // its body text; neighbor discovery finds it exactly once.
    let opts = RelatedOptions {
        max_depth: 1,
        ..Default::default()
    };
    let hits = find_related(&store, &id("Pattern-API-001"), opts);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pattern.id, id("Pattern-AUTH-001"));
    assert_eq!(hits[0].distance, 1);

    // Changing AUTH ripples back to API.
    let affected = detect_ripple_effects(&store, &id("Pattern-AUTH-001"));
    assert_eq!(affected.len(), 1);
    assert_eq!(affected[0].id, id("Pattern-API-001"));

    // AUTH declares nothing outgoing, so nothing ripples from API.
    let affected = detect_ripple_effects(&store, &id("Pattern-API-001"));
    assert!(affected.is_empty());
}

#[test]
fn search_finds_by_body_keywords() {
    let (_dir, store) = library();

    let hits = search(&store, "authentication tokens", 10);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].pattern.id, id("Pattern-AUTH-001"));

    let hits = search(&store, "gateway routing", 10);
    assert_eq!(hits[0].pattern.id, id("Pattern-API-001"));
}

#[test]
fn exported_graph_matches_library() {
    let (_dir, store) = library();
    let graph = export_graph(&store);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].source, id("Pattern-API-001"));
    assert_eq!(graph.edges[0].target, id("Pattern-AUTH-001"));
}

#[test]
fn context_lines_use_descriptions() {
    let (_dir, store) = library();
    let out = format_context(&store, &[id("Pattern-AUTH-001"), id("Pattern-NONE-404")]);
    assert_eq!(
        out,
        "Pattern-AUTH-001: Issues and validates short-lived access tokens."
    );
}

#[test]
fn second_load_serves_from_cache() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Pattern-API-001.md"), API_DOC).unwrap();

    let mut store = PatternStore::new();
    store.load(dir.path());
    let extracted = store.extracted_file_count();

    fs::write(dir.path().join("Pattern-AUTH-001.md"), AUTH_DOC).unwrap();
    store.load(dir.path());

    assert_eq!(store.extracted_file_count(), extracted);
    assert_eq!(store.len(), 1);
}
