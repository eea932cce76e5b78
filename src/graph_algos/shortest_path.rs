use crate::errors::{Result, SearchError};
use crate::graph::{Graph, NodeId};
use super::GraphNodeMap;

use log::error;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path from start to goal, or None if the goal index is not in the map
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;

        // a parent chain longer than the map is a cycle
        if path.len() > node_map.len() {
            return None;
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}

/// Sum the edge weights along a path, read back from the graph
pub(crate) fn path_cost(graph: &Graph, path: &[NodeId]) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, step| {
        let (from, to) = (step[0], step[1]);
        match graph.edge_weight(from, to) {
            Some(weight) => Ok(total + weight),
            None => {
                error!("reconstructed path steps from {from} to {to} without an edge");
                Err(SearchError::UnknownNode { node: to })
            }
        }
    })
}
