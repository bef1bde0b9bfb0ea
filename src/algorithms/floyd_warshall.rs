use super::{AlgorithmError, AlgorithmResult};
use crate::graph::{Graph, NodeId};
use crate::trace::{DistanceMap, PathMap, Trace, TraceStep};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Dense distance and next-hop matrices indexed by node insertion order.
struct DistanceMatrix {
    nodes: Vec<NodeId>,
    dist: Vec<Vec<f64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl DistanceMatrix {
    fn new(graph: &Graph) -> Self {
        let nodes: Vec<NodeId> = graph.nodes().iter().map(|n| n.id.clone()).collect();
        let n = nodes.len();

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        {
            let index: FxHashMap<&str, usize> = nodes
                .iter()
                .enumerate()
                .map(|(i, id)| (id.as_str(), i))
                .collect();
            for edge in graph.edges() {
                let s = index[edge.source.as_str()];
                let t = index[edge.target.as_str()];
                dist[s][t] = edge.weight;
                next[s][t] = Some(t);
            }
        }

        Self { nodes, dist, next }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == id)
    }

    fn row_snapshot(&self, row: usize) -> DistanceMap {
        self.nodes
            .iter()
            .enumerate()
            .map(|(j, id)| (id.clone(), self.dist[row][j]))
            .collect()
    }

    // Walks next-hops from one node to another. No hop chain means the
    // target is unreachable.
    fn path(&self, from: usize, to: usize) -> Vec<NodeId> {
        if from == to {
            return vec![self.nodes[from].clone()];
        }
        if self.next[from][to].is_none() {
            return Vec::new();
        }

        let mut path = vec![self.nodes[from].clone()];
        let mut current = from;
        while current != to {
            match self.next[current][to] {
                Some(hop) => {
                    path.push(self.nodes[hop].clone());
                    current = hop;
                }
                None => return Vec::new(),
            }
        }
        path
    }
}

/// All-pairs relaxation over every pivot node. The full matrix is
/// computed, but the trace and the returned maps are scoped to the
/// requested source row. No negative-cycle detection happens here.
pub fn run_floyd_warshall(graph: &Graph, source: &str) -> Result<AlgorithmResult, AlgorithmError> {
    let timer = Instant::now();
    let mut matrix = DistanceMatrix::new(graph);
    let Some(source_row) = matrix.position(source) else {
        return Err(AlgorithmError::UnknownSource {
            id: source.to_owned(),
        });
    };

    let n = matrix.nodes.len();
    let mut trace = Trace::new();
    let mut pivots: Vec<NodeId> = Vec::new();

    trace.push(TraceStep::Init {
        source: source.to_owned(),
        distances: matrix.row_snapshot(source_row),
    });

    for k in 0..n {
        pivots.push(matrix.nodes[k].clone());
        trace.push(TraceStep::Visit {
            node: Some(matrix.nodes[k].clone()),
            round: Some(k + 1),
            visited: pivots.clone(),
            distances: matrix.row_snapshot(source_row),
        });

        for i in 0..n {
            if matrix.dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let known = matrix.dist[i][j];
                let through = matrix.dist[i][k] + matrix.dist[k][j];
                if through < known {
                    matrix.dist[i][j] = through;
                    matrix.next[i][j] = matrix.next[i][k];

                    if i == source_row {
                        trace.push(TraceStep::Update {
                            node: matrix.nodes[j].clone(),
                            via: matrix.nodes[k].clone(),
                            old_distance: known,
                            new_distance: through,
                            visited: pivots.clone(),
                            distances: matrix.row_snapshot(source_row),
                        });
                    }
                }
            }
        }
    }

    trace.push(TraceStep::Final {
        visited: pivots,
        distances: matrix.row_snapshot(source_row),
        offending_edge: None,
    });

    let mut distances = DistanceMap::default();
    let mut paths = PathMap::default();
    for (j, id) in matrix.nodes.iter().enumerate() {
        distances.insert(id.clone(), matrix.dist[source_row][j]);
        paths.insert(id.clone(), matrix.path(source_row, j));
    }

    Ok(AlgorithmResult {
        trace,
        distances,
        paths,
        elapsed_ms: timer.elapsed().as_secs_f64() * 1000.0,
    })
}
