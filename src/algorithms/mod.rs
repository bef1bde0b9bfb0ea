pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
mod utils;

pub use bellman_ford::run_bellman_ford;
pub use dijkstra::run_dijkstra;
pub use floyd_warshall::run_floyd_warshall;

use crate::graph::{Graph, NodeId};
use crate::trace::{DistanceMap, PathMap, Trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    #[default]
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

impl AlgorithmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::BellmanFord => "bellman_ford",
            AlgorithmKind::FloydWarshall => "floyd_warshall",
        }
    }

    /// Every kind, in the order the comparison runner executes them.
    pub fn all() -> [AlgorithmKind; 3] {
        [
            AlgorithmKind::Dijkstra,
            AlgorithmKind::BellmanFord,
            AlgorithmKind::FloydWarshall,
        ]
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AlgorithmKind {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "bellman_ford" | "bellman-ford" | "bellmanford" => AlgorithmKind::BellmanFord,
            "floyd_warshall" | "floyd-warshall" | "floydwarshall" => AlgorithmKind::FloydWarshall,
            "dijkstra" => AlgorithmKind::Dijkstra,
            _ => AlgorithmKind::default(),
        }
    }
}

impl From<String> for AlgorithmKind {
    fn from(value: String) -> Self {
        AlgorithmKind::from(value.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("unknown source node: {id}")]
    UnknownSource { id: NodeId },
    #[error("negative cycle detected on edge {from} -> {to}")]
    NegativeCycle { from: NodeId, to: NodeId },
    #[error("graph has no nodes")]
    EmptyGraph,
}

/// Outcome of one run: the step trace plus the extracted distances and
/// paths for every node, keyed by node id. Unreachable nodes carry an
/// infinite distance and an empty path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    pub trace: Trace,
    pub distances: DistanceMap,
    pub paths: PathMap,
    pub elapsed_ms: f64,
}

pub fn run_algorithm(
    kind: AlgorithmKind,
    graph: &Graph,
    source: &str,
) -> Result<AlgorithmResult, AlgorithmError> {
    if graph.is_empty() {
        return Err(AlgorithmError::EmptyGraph);
    }

    debug!(
        algorithm = %kind,
        source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Running algorithm"
    );

    match kind {
        AlgorithmKind::Dijkstra => run_dijkstra(graph, source),
        AlgorithmKind::BellmanFord => run_bellman_ford(graph, source),
        AlgorithmKind::FloydWarshall => run_floyd_warshall(graph, source),
    }
}
