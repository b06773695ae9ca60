//! Node/edge view of the influence matrix for visualization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub name: String,
}

/// A weighted edge. In undirected views `source < target` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedGraph {
    pub nodes: Vec<GraphNode>,
    #[serde(rename = "links")]
    pub edges: Vec<GraphEdge>,
    pub directed: bool,
}

impl ProjectedGraph {
    pub fn edge(&self, source: usize, target: usize) -> Option<&GraphEdge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}
