use super::utils::{initial_distances, reconstruct_paths};
use super::{AlgorithmError, AlgorithmResult};
use crate::graph::{Graph, NodeId};
use crate::trace::{DistanceMap, Trace, TraceStep};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

struct BellmanFordState {
    distances: DistanceMap,
    previous: FxHashMap<NodeId, NodeId>,
    visited: FxHashSet<NodeId>,
    visited_order: Vec<NodeId>,
}

impl BellmanFordState {
    fn new(graph: &Graph, source: &str) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(source.to_owned());

        Self {
            distances: initial_distances(graph, source),
            previous: FxHashMap::default(),
            visited,
            visited_order: vec![source.to_owned()],
        }
    }

    fn mark_visited(&mut self, node: &str) {
        if self.visited.insert(node.to_owned()) {
            self.visited_order.push(node.to_owned());
        }
    }

    // Distance of the edge source, or None while it is still unreached;
    // relaxing from infinity is meaningless.
    fn reached_distance(&self, node: &NodeId) -> Option<f64> {
        match self.distances.get(node) {
            Some(&d) if d != f64::INFINITY => Some(d),
            _ => None,
        }
    }
}

/// Label-correcting search: up to n-1 rounds of relaxing every edge in
/// insertion order, with an early exit once a round changes nothing.
/// Handles negative weights; a negative cycle aborts the run.
pub fn run_bellman_ford(graph: &Graph, source: &str) -> Result<AlgorithmResult, AlgorithmError> {
    if !graph.has_node(source) {
        return Err(AlgorithmError::UnknownSource {
            id: source.to_owned(),
        });
    }

    let timer = Instant::now();
    let mut state = BellmanFordState::new(graph, source);
    let mut trace = Trace::new();
    let rounds = graph.node_count().saturating_sub(1);

    trace.push(TraceStep::Init {
        source: source.to_owned(),
        distances: state.distances.clone(),
    });

    for round in 1..=rounds {
        trace.push(TraceStep::Visit {
            node: None,
            round: Some(round),
            visited: state.visited_order.clone(),
            distances: state.distances.clone(),
        });

        let mut updated = false;
        for edge in graph.edges() {
            let Some(from) = state.reached_distance(&edge.source) else {
                continue;
            };
            let known = state.distances[&edge.target];
            let candidate = from + edge.weight;
            if candidate < known {
                state.distances.insert(edge.target.clone(), candidate);
                state
                    .previous
                    .insert(edge.target.clone(), edge.source.clone());
                state.mark_visited(&edge.target);
                updated = true;

                trace.push(TraceStep::Update {
                    node: edge.target.clone(),
                    via: edge.source.clone(),
                    old_distance: known,
                    new_distance: candidate,
                    visited: state.visited_order.clone(),
                    distances: state.distances.clone(),
                });
            }
        }

        if !updated {
            break;
        }
    }

    // One more pass over the edges: any improvement still possible now
    // proves a negative cycle. The partial run is discarded.
    for edge in graph.edges() {
        let Some(from) = state.reached_distance(&edge.source) else {
            continue;
        };
        if from + edge.weight < state.distances[&edge.target] {
            // A failed run still closes its trace with a Final step.
            trace.push(TraceStep::Final {
                visited: state.visited_order.clone(),
                distances: state.distances.clone(),
                offending_edge: Some((edge.source.clone(), edge.target.clone())),
            });
            return Err(AlgorithmError::NegativeCycle {
                from: edge.source.clone(),
                to: edge.target.clone(),
            });
        }
    }

    trace.push(TraceStep::Final {
        visited: state.visited_order.clone(),
        distances: state.distances.clone(),
        offending_edge: None,
    });

    let paths = reconstruct_paths(graph, source, &state.previous);
    Ok(AlgorithmResult {
        trace,
        distances: state.distances,
        paths,
        elapsed_ms: timer.elapsed().as_secs_f64() * 1000.0,
    })
}
