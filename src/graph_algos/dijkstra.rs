use crate::collections::FxIndexMap;
use crate::errors::Result;
use crate::graph::{Graph, NodeId};
use super::best_first::best_first;
use super::result::{Algorithm, PathResult};
use super::run_search;

use log::debug;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Best-first search with a zero heuristic, expanding nodes strictly by distance from start
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Result<PathResult> {
    run_search(graph, start, end, Algorithm::Dijkstra, |_| 0.0)
}

/// Returns the finalized distance of every node reachable from start, in settle order
pub fn shortest_distances(graph: &Graph, start: NodeId) -> Result<FxIndexMap<NodeId, f64>> {
    let state = best_first(graph, start, |_| 0.0, |_| false)?;
    debug!("settled {} nodes reachable from {start}", state.explored);

    Ok(state.node_map
        .keys()
        .filter_map(|&node| state.settled_cost(node).map(|cost| (node, cost)))
        .collect())
}
