use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type NodeId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
}

/// Directed edge. At most one edge exists per ordered (source, target)
/// pair; the reverse direction is a separate edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge references unknown endpoint: {from} -> {to}")]
    UnknownEndpoint { from: NodeId, to: NodeId },
    #[error("self-loop on node: {node}")]
    SelfLoop { node: NodeId },
    #[error("duplicate edge for ordered pair: {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },
}

/// Directed weighted graph with insertion-ordered storage. Nodes and
/// edges are kept in vecs so that every traversal the engine makes is
/// deterministic for the same build sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(default = "initial_id_counter")]
    id_counter: u64,
}

fn initial_id_counter() -> u64 {
    1
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            id_counter: 1,
        }
    }

    /// Adds a node with a freshly minted id and returns the id.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.mint_id();
        self.nodes.push(Node {
            id: id.clone(),
            label: label.into(),
        });
        id
    }

    // Minted ids skip over ids that already arrived via insert_node.
    fn mint_id(&mut self) -> NodeId {
        loop {
            let id = format!("node{}", self.id_counter);
            self.id_counter += 1;
            if !self.has_node(&id) {
                return id;
            }
        }
    }

    /// Upsert by id: replaces the label if the id exists (returns false),
    /// appends a new node otherwise (returns true).
    pub fn insert_node(&mut self, node: Node) -> bool {
        if let Some(existing) = self.nodes.iter_mut().find(|n| n.id == node.id) {
            existing.label = node.label;
            false
        } else {
            self.nodes.push(node);
            true
        }
    }

    /// Adds a directed edge. Rejects unknown endpoints and self-loops
    /// (returns false). A repeated ordered pair overwrites the stored
    /// weight instead of adding a parallel edge.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> bool {
        if !self.has_node(source) || !self.has_node(target) {
            return false;
        }
        if source == target {
            return false;
        }
        if let Some(existing) = self.edge_mut(source, target) {
            existing.weight = weight;
            return true;
        }
        self.edges.push(Edge {
            source: source.to_owned(),
            target: target.to_owned(),
            weight,
        });
        true
    }

    pub fn update_edge_weight(&mut self, source: &str, target: &str, weight: f64) -> bool {
        match self.edge_mut(source, target) {
            Some(edge) => {
                edge.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    pub fn remove_edge(&mut self, source: &str, target: &str) -> bool {
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.source == source && e.target == target));
        self.edges.len() != before
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    fn edge_mut(&mut self, source: &str, target: &str) -> Option<&mut Edge> {
        self.edges
            .iter_mut()
            .find(|e| e.source == source && e.target == target)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Structural check for graphs built outside the mutator methods
    /// (deserialized input): endpoints resolve, no self-loops, no
    /// duplicate ordered pairs.
    pub fn validate(&self) -> Result<(), GraphError> {
        let ids: FxHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut seen = FxHashSet::default();
        for edge in &self.edges {
            if !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()) {
                return Err(GraphError::UnknownEndpoint {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
            if edge.source == edge.target {
                return Err(GraphError::SelfLoop {
                    node: edge.source.clone(),
                });
            }
            if !seen.insert((edge.source.as_str(), edge.target.as_str())) {
                return Err(GraphError::DuplicateEdge {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
