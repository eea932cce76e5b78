mod spec;

pub use spec::{EdgeSpec, GraphSpec, NodeSpec};

use crate::collections::FxIndexMap;
use crate::errors::{Result, SearchError};
use crate::geometry::Point;

/// Identifier of a node, unique within one graph
pub type NodeId = usize;


/// Half of an undirected edge as seen from its source node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}


/// Node position plus its incident edges
#[derive(Clone, Debug, Default)]
struct NodeEntry {
    position: Point,
    edges: Vec<Edge>,
}


/// Undirected weighted graph, read-only once built
///
/// Nodes keep their insertion order, so iterating a graph built from the same
/// input always yields the same sequence. Every edge is stored in both
/// directions with the same weight.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<NodeId, NodeEntry>,
    edge_count: usize,
}

impl Graph {

    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build a graph from an explicit node/edge description
    pub fn from_spec(spec: &GraphSpec) -> Result<Self> {
        spec.build()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Incident edges of a node, in insertion order
    pub fn neighbors(&self, id: NodeId) -> Result<&[Edge]> {
        self.nodes
            .get(&id)
            .map(|entry| entry.edges.as_slice())
            .ok_or(SearchError::UnknownNode { node: id })
    }

    pub fn position(&self, id: NodeId) -> Result<Point> {
        self.nodes
            .get(&id)
            .map(|entry| entry.position)
            .ok_or(SearchError::UnknownNode { node: id })
    }

    /// Cheapest direct edge between two nodes, if they are adjacent
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.nodes.get(&from)?
            .edges
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .reduce(f64::min)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Node position map, used for rendering
    pub fn positions(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.nodes.iter().map(|(id, entry)| (*id, entry.position))
    }
}


/// Relative slack allowed when an explicit weight is compared to the endpoint distance
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Collects nodes and edges, validating each as it arrives
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: FxIndexMap<NodeId, NodeEntry>,
    edge_count: usize,
}

impl GraphBuilder {

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: FxIndexMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
        }
    }

    /// Add a node, rejecting duplicate ids and non finite positions
    pub fn add_node(&mut self, id: NodeId, position: Point) -> Result<&mut Self> {
        if !position.is_finite() {
            return Err(SearchError::invalid_graph(format!("node {id} has a non finite position")));
        }
        if self.nodes.contains_key(&id) {
            return Err(SearchError::invalid_graph(format!("duplicate node id {id}")));
        }
        self.nodes.insert(id, NodeEntry { position, edges: Vec::new() });
        Ok(self)
    }

    /// Connect two nodes, weighting the edge by their Euclidean distance
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<&mut Self> {
        let weight = self.position(a)?.distance(&self.position(b)?);
        self.add_edge_with_weight(a, b, weight)
    }

    /// Connect two nodes with an explicit weight
    ///
    /// The weight may exceed the straight line distance between the endpoints but
    /// never undercut it, so the Euclidean heuristic stays admissible.
    pub fn add_edge_with_weight(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<&mut Self> {
        // both endpoints must exist before either half is written
        let distance = self.position(a)?.distance(&self.position(b)?);

        if a == b {
            return Err(SearchError::invalid_graph(format!("self loop on node {a}")));
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(SearchError::invalid_graph(format!(
                "edge {a} - {b} has weight {weight}, weights must be positive and finite"
            )));
        }
        if weight < distance * (1.0 - WEIGHT_TOLERANCE) {
            return Err(SearchError::invalid_graph(format!(
                "edge {a} - {b} has weight {weight}, shorter than the distance {distance} between its endpoints"
            )));
        }

        if let Some(entry) = self.nodes.get_mut(&a) {
            entry.edges.push(Edge { to: b, weight });
        }
        if let Some(entry) = self.nodes.get_mut(&b) {
            entry.edges.push(Edge { to: a, weight });
        }
        self.edge_count += 1;
        Ok(self)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edge_count: self.edge_count,
        }
    }

    fn position(&self, id: NodeId) -> Result<Point> {
        self.nodes
            .get(&id)
            .map(|entry| entry.position)
            .ok_or(SearchError::UnknownNode { node: id })
    }
}
