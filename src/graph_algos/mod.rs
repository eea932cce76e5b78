pub mod dijkstra;
pub mod a_star;
mod best_first;
mod frontier;
mod result;
mod shortest_path;

pub use a_star::{AStar, Heuristic};
pub use dijkstra::{dijkstra, shortest_distances};
pub use result::{Algorithm, Comparison, PathResult};

use std::time::Instant;

use log::debug;

use crate::collections::FxIndexMap;
use crate::errors::{Result, SearchError};
use crate::graph::{Graph, NodeId};
use best_first::best_first;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Find a path from start to end with the requested algorithm
pub fn find_path(graph: &Graph, start: NodeId, end: NodeId, algorithm: Algorithm) -> Result<PathResult> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, start, end),
        Algorithm::AStar => AStar::new().plan(graph, start, end),
        Algorithm::AStarManhattan => AStar::with_heuristic(Heuristic::Manhattan).plan(graph, start, end),
    }
}

/// Run Dijkstra and Euclidean A* on the same endpoints and report both
/// Each run owns its own search state, nothing carries over between them
pub fn compare(graph: &Graph, start: NodeId, end: NodeId) -> Result<Comparison> {
    let dijkstra = find_path(graph, start, end, Algorithm::Dijkstra)?;
    let astar = find_path(graph, start, end, Algorithm::AStar)?;

    Ok(Comparison { dijkstra, astar })
}


/// Validate endpoints, time one best-first search and package its result
pub(crate) fn run_search<H>(graph: &Graph, start: NodeId, end: NodeId, algorithm: Algorithm, heuristic: H) -> Result<PathResult>
where
    H: Fn(NodeId) -> f64,
{
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(SearchError::InvalidNode { node });
        }
    }

    let started = Instant::now();
    let state = best_first(graph, start, heuristic, |node| node == end)?;
    let elapsed = started.elapsed();

    debug!(
        "{algorithm} {start} -> {end}: {:?} after exploring {} nodes in {:?}",
        state.status, state.explored, elapsed
    );

    result::build_result(graph, start, end, algorithm, &state, elapsed)
}
