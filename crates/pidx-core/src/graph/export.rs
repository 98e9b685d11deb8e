//! Flatten the store into a node/edge structure for visualization.
//!
//! The export is a pure, non-cached snapshot: one node per record, one
//! edge per declared relationship. Edge targets are exported as-is —
//! validating that they resolve is the visualization consumer's job,
//! since a dangling node is itself something worth rendering.

use crate::pattern::PatternStatus;
use crate::store::PatternStore;
use pidx_common::PatternId;
use serde::{Deserialize, Serialize};

/// Relationship type carried by a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Related,
    Depends,
    Supersedes,
}

/// One record, flattened to its display essentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: PatternId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub domain: Option<String>,
    pub status: PatternStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quality_score: Option<f64>,
}

/// One directed relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: PatternId,
    pub target: PatternId,
    pub kind: EdgeKind,
}

/// Derived, disposable view of the whole library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Build the graph snapshot in a single pass over the store.
pub fn export_graph(store: &PatternStore) -> PatternGraph {
    let mut nodes = Vec::with_capacity(store.len());
    let mut edges = Vec::new();

    for pattern in store.all() {
        nodes.push(GraphNode {
            id: pattern.id.clone(),
            name: pattern.name.clone(),
            domain: pattern.domain.clone(),
            status: pattern.status,
            quality_score: pattern.quality_score,
        });
        for target in &pattern.related_patterns {
            edges.push(GraphEdge {
                source: pattern.id.clone(),
                target: target.clone(),
                kind: EdgeKind::Related,
            });
        }
        for target in &pattern.dependencies {
            edges.push(GraphEdge {
                source: pattern.id.clone(),
                target: target.clone(),
                kind: EdgeKind::Depends,
            });
        }
        if let Some(target) = &pattern.supersedes {
            edges.push(GraphEdge {
                source: pattern.id.clone(),
                target: target.clone(),
                kind: EdgeKind::Supersedes,
            });
        }
    }

    PatternGraph { nodes, edges }
}
