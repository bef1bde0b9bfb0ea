pub mod algorithms;
pub mod comparison;
pub mod graph;
pub mod playback;
pub mod trace;

// Re-export commonly used items
pub use algorithms::{
    AlgorithmError, AlgorithmKind, AlgorithmResult, run_algorithm, run_bellman_ford,
    run_dijkstra, run_floyd_warshall,
};
pub use comparison::{ComparisonResult, run_comparison};
pub use graph::{Edge, Graph, GraphError, Node, NodeId};
pub use playback::{PlaybackController, PlaybackMode, ScheduledTick, TickToken};
pub use trace::{DistanceMap, PathMap, Trace, TraceStep};
