use serde::Deserialize;

use super::{Graph, GraphBuilder, NodeId};
use crate::errors::Result;
use crate::geometry::Point;


/// Explicit description of a graph, as received from a caller
///
/// ```json
/// {
///   "nodes": [{"id": 0, "x": 0.0, "y": 0.0}, {"id": 1, "x": 1.0, "y": 0.0}],
///   "edges": [{"from": 0, "to": 1, "weight": 1.5}]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Undirected edge; a missing weight means the distance between the endpoints
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl GraphSpec {

    pub fn build(&self) -> Result<Graph> {
        let mut builder = GraphBuilder::with_capacity(self.nodes.len());

        for node in &self.nodes {
            builder.add_node(node.id, Point::new(node.x, node.y))?;
        }
        for edge in &self.edges {
            match edge.weight {
                Some(weight) => builder.add_edge_with_weight(edge.from, edge.to, weight)?,
                None => builder.add_edge(edge.from, edge.to)?,
            };
        }

        Ok(builder.build())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SearchError;

    #[test]
    fn test_spec_from_json() {
        let spec: GraphSpec = serde_json::from_str(r#"{
            "nodes": [
                {"id": 10, "x": 0.0, "y": 0.0},
                {"id": 20, "x": 3.0, "y": 4.0},
                {"id": 30}
            ],
            "edges": [
                {"from": 10, "to": 20},
                {"from": 20, "to": 30, "weight": 7.5}
            ]
        }"#).unwrap();

        let graph = Graph::from_spec(&spec).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(10, 20), Some(5.0));
        assert_eq!(graph.edge_weight(30, 20), Some(7.5));
        assert_eq!(graph.position(30).unwrap(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_spec_edge_to_missing_node() {
        let spec = GraphSpec {
            nodes: vec![NodeSpec { id: 1, x: 0.0, y: 0.0 }],
            edges: vec![EdgeSpec { from: 1, to: 2, weight: Some(1.0) }],
        };

        assert_eq!(spec.build().unwrap_err(), SearchError::UnknownNode { node: 2 });
    }

    #[test]
    fn test_spec_rejects_shortcut_weight() {
        // 0 - 3 - 1 would cost 2 while 0 and 1 sit 10 apart
        let spec: GraphSpec = serde_json::from_str(r#"{
            "nodes": [
                {"id": 0, "x": 0.0},
                {"id": 1, "x": 10.0},
                {"id": 3, "x": 100.0}
            ],
            "edges": [
                {"from": 0, "to": 1, "weight": 10.0},
                {"from": 0, "to": 3, "weight": 1.0},
                {"from": 3, "to": 1, "weight": 1.0}
            ]
        }"#).unwrap();

        assert!(matches!(spec.build(), Err(SearchError::InvalidGraph { .. })));
    }

    #[test]
    fn test_spec_duplicate_node() {
        let spec = GraphSpec {
            nodes: vec![
                NodeSpec { id: 1, x: 0.0, y: 0.0 },
                NodeSpec { id: 1, x: 5.0, y: 0.0 },
            ],
            edges: vec![],
        };

        assert!(matches!(spec.build(), Err(SearchError::InvalidGraph { .. })));
    }

    #[test]
    fn test_empty_spec_builds_empty_graph() {
        let spec: GraphSpec = serde_json::from_str("{}").unwrap();
        let graph = spec.build().unwrap();

        assert!(graph.is_empty());
    }
}
