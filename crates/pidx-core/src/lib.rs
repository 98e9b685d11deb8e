//! Pattern Index core: extraction, storage, search, and graph traversal
//! for a library of structured knowledge records.
//!
//! The pipeline is load-once, read-many:
//! 1. [`extract::Extractor`] turns each `(filename, raw text)` pair into
//!    a validated [`Pattern`] record.
//! 2. [`PatternStore`] accumulates records during a one-time load and is
//!    read-only afterwards.
//! 3. [`search::search`], the [`graph`] traversals, and
//!    [`graph::export_graph`] are pure reads over the cached collection.
//!
//! No operation here performs I/O after load, and every query returns a
//! value (possibly empty) rather than an error for well-formed
//! arguments.

pub mod context;
pub mod extract;
pub mod graph;
pub mod pattern;
pub mod search;
pub mod store;

pub use context::format_context;
pub use extract::Extractor;
pub use graph::{
    detect_ripple_effects, export_graph, find_dependencies, find_related, find_superseded_by,
    EdgeKind, GraphEdge, GraphNode, PatternGraph, RelatedHit, RelatedOptions,
};
pub use pattern::{Pattern, PatternStatus};
pub use search::{search, SearchHit};
pub use store::PatternStore;

pub use pidx_common::{Error, PatternId, Result};
