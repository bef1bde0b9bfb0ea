use super::utils::{build_adjacency, initial_distances, reconstruct_paths};
use super::{AlgorithmError, AlgorithmResult};
use crate::graph::{Graph, NodeId};
use crate::trace::{DistanceMap, Trace, TraceStep};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

#[derive(Clone)]
struct FrontierNode {
    cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        // Equal costs fall back to insertion order, so ties pop FIFO.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct DijkstraState {
    heap: BinaryHeap<FrontierNode>,
    seq: u64,
    distances: DistanceMap,
    previous: FxHashMap<NodeId, NodeId>,
    settled: FxHashSet<NodeId>,
    settled_order: Vec<NodeId>,
}

impl DijkstraState {
    fn new(graph: &Graph, source: &str) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierNode {
            cost: 0.0,
            seq: 0,
            node: source.to_owned(),
        });

        Self {
            heap,
            seq: 1,
            distances: initial_distances(graph, source),
            previous: FxHashMap::default(),
            settled: FxHashSet::default(),
            settled_order: Vec::new(),
        }
    }

    fn settle(&mut self, node: &str) {
        self.settled.insert(node.to_owned());
        self.settled_order.push(node.to_owned());
    }

    fn visit_neighbor(
        &mut self,
        neighbor: &NodeId,
        current: &NodeId,
        weight: f64,
        current_cost: f64,
        trace: &mut Trace,
    ) {
        if self.settled.contains(neighbor) {
            return;
        }

        let known = self.distances[neighbor];
        let candidate = current_cost + weight;
        if candidate >= known {
            return;
        }

        self.distances.insert(neighbor.clone(), candidate);
        self.previous.insert(neighbor.clone(), current.clone());
        self.heap.push(FrontierNode {
            cost: candidate,
            seq: self.seq,
            node: neighbor.clone(),
        });
        self.seq += 1;

        trace.push(TraceStep::Update {
            node: neighbor.clone(),
            via: current.clone(),
            old_distance: known,
            new_distance: candidate,
            visited: self.settled_order.clone(),
            distances: self.distances.clone(),
        });
    }
}

/// Label-setting search: settles one node per heap pop, never revisits.
/// Assumes non-negative weights.
pub fn run_dijkstra(graph: &Graph, source: &str) -> Result<AlgorithmResult, AlgorithmError> {
    if !graph.has_node(source) {
        return Err(AlgorithmError::UnknownSource {
            id: source.to_owned(),
        });
    }

    let timer = Instant::now();
    let adjacency = build_adjacency(graph);
    let mut state = DijkstraState::new(graph, source);
    let mut trace = Trace::new();

    trace.push(TraceStep::Init {
        source: source.to_owned(),
        distances: state.distances.clone(),
    });

    while let Some(FrontierNode {
        cost,
        node: current,
        ..
    }) = state.heap.pop()
    {
        // Stale frontier entry: this node already settled via a route
        // recorded earlier.
        if state.settled.contains(&current) {
            continue;
        }
        state.settle(&current);

        trace.push(TraceStep::Visit {
            node: Some(current.clone()),
            round: None,
            visited: state.settled_order.clone(),
            distances: state.distances.clone(),
        });

        for (neighbor, weight) in &adjacency[&current] {
            state.visit_neighbor(neighbor, &current, *weight, cost, &mut trace);
        }
    }

    trace.push(TraceStep::Final {
        visited: state.settled_order.clone(),
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
