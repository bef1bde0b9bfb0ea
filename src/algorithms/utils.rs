use crate::graph::{Graph, NodeId};
use crate::trace::{DistanceMap, PathMap};
use rustc_hash::FxHashMap;

/// Outgoing neighbors per node, in edge insertion order. Every node gets
/// an entry, so lookups during a run never miss.
pub(crate) fn build_adjacency(graph: &Graph) -> FxHashMap<NodeId, Vec<(NodeId, f64)>> {
    let mut adjacency: FxHashMap<NodeId, Vec<(NodeId, f64)>> = FxHashMap::default();
    for node in graph.nodes() {
        adjacency.entry(node.id.clone()).or_default();
    }
    for edge in graph.edges() {
        adjacency
            .entry(edge.source.clone())
            .or_default()
            .push((edge.target.clone(), edge.weight));
    }
    adjacency
}

/// Every node starts at infinity except the source at zero.
pub(crate) fn initial_distances(graph: &Graph, source: &str) -> DistanceMap {
    let mut distances: DistanceMap = graph
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), f64::INFINITY))
        .collect();
    distances.insert(source.to_owned(), 0.0);
    distances
}

/// Rebuilds one path per node from the predecessor map. Unreachable
/// nodes get an empty path; the source maps to the single-node path.
pub(crate) fn reconstruct_paths(
    graph: &Graph,
    source: &str,
    previous: &FxHashMap<NodeId, NodeId>,
) -> PathMap {
    let mut paths = PathMap::default();
    for node in graph.nodes() {
        paths.insert(node.id.clone(), path_to(source, &node.id, previous));
    }
    paths
}

fn path_to(source: &str, target: &str, previous: &FxHashMap<NodeId, NodeId>) -> Vec<NodeId> {
    let mut path = vec![target.to_owned()];
    let mut current = target;
    while let Some(parent) = previous.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    // A walk that never reached the source means the target is
    // disconnected from it.
    if path[0] == source { path } else { Vec::new() }
}
