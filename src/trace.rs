use crate::graph::NodeId;
use rustc_hash::FxHashMap;
use serde::Serialize;

pub type DistanceMap = FxHashMap<NodeId, f64>;
pub type PathMap = FxHashMap<NodeId, Vec<NodeId>>;

/// One recorded algorithm event. Every step carries the full distance
/// map as it stood when the step was recorded (an owned snapshot, never
/// a view into live state) and the nodes visited so far in first-visit
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceStep {
    Init {
        source: NodeId,
        distances: DistanceMap,
    },
    /// Algorithm-specific commitment marker: the node being settled
    /// (label-setting), a relaxation round over all edges
    /// (label-correcting), or the pivot under consideration (all-pairs,
    /// which fills both fields).
    Visit {
        #[serde(skip_serializing_if = "Option::is_none")]
        node: Option<NodeId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        round: Option<usize>,
        visited: Vec<NodeId>,
        distances: DistanceMap,
    },
    Update {
        node: NodeId,
        via: NodeId,
        old_distance: f64,
        new_distance: f64,
        visited: Vec<NodeId>,
        distances: DistanceMap,
    },
    Final {
        visited: Vec<NodeId>,
        distances: DistanceMap,
        #[serde(skip_serializing_if = "Option::is_none")]
        offending_edge: Option<(NodeId, NodeId)>,
    },
}

impl TraceStep {
    /// One-line summary for step-by-step displays.
    pub fn description(&self) -> String {
        match self {
            TraceStep::Init { source, .. } => {
                format!("Initialized distances from {source}")
            }
            TraceStep::Visit {
                node: Some(node),
                round: Some(_),
                ..
            } => format!("Considering paths through {node}"),
            TraceStep::Visit {
                node: Some(node), ..
            } => format!("Visiting {node}"),
            TraceStep::Visit {
                round: Some(round), ..
            } => format!("Relaxation round {round}"),
            TraceStep::Visit { .. } => "Visiting".to_string(),
            TraceStep::Update {
                node,
                via,
                new_distance,
                ..
            } => format!("Updated {node} via {via} to {new_distance}"),
            TraceStep::Final {
                offending_edge: Some((from, to)),
                ..
            } => format!("Negative cycle detected on edge {from} -> {to}"),
            TraceStep::Final { .. } => "Search complete".to_string(),
        }
    }

    pub fn distances(&self) -> &DistanceMap {
        match self {
            TraceStep::Init { distances, .. }
            | TraceStep::Visit { distances, .. }
            | TraceStep::Update { distances, .. }
            | TraceStep::Final { distances, .. } => distances,
        }
    }
}

/// Append-only record of one algorithm run. Steps are pushed while the
/// run executes and never mutate afterwards; consumers only read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&TraceStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step; 0 for an empty trace.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
