//! Graph views over the pattern store: traversal algorithms and the
//! flattened export for visualization consumers.

pub mod export;
pub mod traverse;

pub use export::{export_graph, EdgeKind, GraphEdge, GraphNode, PatternGraph};
pub use traverse::{
    detect_ripple_effects, find_dependencies, find_related, find_superseded_by, RelatedHit,
    RelatedOptions,
};
