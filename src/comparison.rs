use crate::algorithms::{AlgorithmError, AlgorithmKind, AlgorithmResult, run_algorithm};
use crate::graph::Graph;
use crate::trace::DistanceMap;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub algorithm: AlgorithmKind,
    pub elapsed_ms: f64,
    pub distances: DistanceMap,
}

impl From<(AlgorithmKind, &AlgorithmResult)> for ComparisonResult {
    fn from((algorithm, result): (AlgorithmKind, &AlgorithmResult)) -> Self {
        Self {
            algorithm,
            elapsed_ms: result.elapsed_ms,
            distances: result.distances.clone(),
        }
    }
}

/// Runs every algorithm on the same input, in a fixed order. The first
/// failure aborts the whole comparison; no partial results come back.
pub fn run_comparison(
    graph: &Graph,
    source: &str,
) -> Result<Vec<ComparisonResult>, AlgorithmError> {
    let mut results = Vec::new();

    for kind in AlgorithmKind::all() {
        let run = run_algorithm(kind, graph, source)?;
        debug!(algorithm = %kind, elapsed_ms = run.elapsed_ms, "Comparison run finished");
        results.push(ComparisonResult::from((kind, &run)));
    }

    Ok(results)
}
