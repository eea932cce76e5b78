use crate::collections::FxHashSet;
use crate::errors::{Result, SearchError};
use crate::graph::{Graph, NodeId};
use super::GraphNodeMap;
use super::frontier::{Frontier, FrontierEntry};

use indexmap::map::Entry::{Occupied, Vacant};
use log::{error, trace};


/// Lifecycle of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Unstarted,
    Running,
    /// Goal node was settled
    Found,
    /// Frontier emptied before any goal node was settled
    Exhausted,
}


/// Everything a single search owns
/// - node_map: best known (parent_index, cost) per reached node, parent of start is usize::MAX
/// - settled: nodes whose cost is final
/// - explored: number of settle events
#[derive(Debug)]
pub(crate) struct SearchState {
    pub node_map: GraphNodeMap<NodeId, f64>,
    pub settled: FxHashSet<NodeId>,
    pub explored: usize,
    pub status: SearchStatus,
    pub goal_index: Option<usize>,
}

impl SearchState {
    fn new() -> Self {
        Self {
            node_map: GraphNodeMap::default(),
            settled: FxHashSet::default(),
            explored: 0,
            status: SearchStatus::Unstarted,
            goal_index: None,
        }
    }

    /// Finalized cost of a settled node
    pub fn settled_cost(&self, node: NodeId) -> Option<f64> {
        if !self.settled.contains(&node) {
            return None;
        }
        self.node_map.get(&node).map(|&(_, cost)| cost)
    }
}


/// Generalized best-first search shared by Dijkstra and A*
///
/// Expands nodes in order of `cost + heuristic(node)` until a node satisfying
/// `goal_fn` is settled or the frontier runs dry. Dijkstra passes a heuristic of
/// zero. For the result to be optimal the heuristic must be admissible, and
/// consistent for every node to be settled at most once with its final cost.
pub(crate) fn best_first<H, G>(graph: &Graph, start: NodeId, heuristic: H, goal_fn: G) -> Result<SearchState>
where
    H: Fn(NodeId) -> f64,
    G: Fn(NodeId) -> bool,
{
    if !graph.contains(start) {
        return Err(SearchError::InvalidNode { node: start });
    }

    let mut state = SearchState::new();
    let mut frontier = Frontier::new();

    state.node_map.insert(start, (usize::MAX, 0.0));
    frontier.push(start, 0.0, heuristic(start));
    state.status = SearchStatus::Running;

    while let Some(FrontierEntry { node, cost, .. }) = frontier.pop() {

        // fetch current best cost for node
        let Some((index, _, &(_, best))) = state.node_map.get_full(&node) else {
            error!("frontier yielded node {node} that was never reached");
            return Err(SearchError::UnknownNode { node });
        };

        // A settled node or a better known cost means this entry is stale
        if state.settled.contains(&node) || cost > best {
            trace!("skipping stale entry for node {node} at cost {cost}");
            continue;
        }

        state.settled.insert(node);
        state.explored += 1;

        if goal_fn(node) {
            trace!("goal {node} settled with {} frontier entries left", frontier.len());
            state.status = SearchStatus::Found;
            state.goal_index = Some(index);
            return Ok(state);
        }

        let edges = graph.neighbors(node).inspect_err(|_| {
            error!("node {node} vanished from the graph mid search");
        })?;

        for edge in edges {
            let new_cost = best + edge.weight;

            match state.node_map.entry(edge.to) {
                Vacant(e) => {
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        e.insert((index, new_cost));
                    } else {
                        // The existing path is at least as good
                        continue;
                    }
                }
            }

            frontier.push(edge.to, new_cost, new_cost + heuristic(edge.to));
        }
    }

    debug_assert!(frontier.is_empty());
    state.status = SearchStatus::Exhausted;
    Ok(state)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn line(weights: &[f64]) -> Graph {
        let mut builder = Graph::builder();
        for id in 0..=weights.len() {
            builder.add_node(id, Point::new(id as f64, 0.0)).unwrap();
        }
        for (id, &weight) in weights.iter().enumerate() {
            builder.add_edge_with_weight(id, id + 1, weight).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_found_sets_goal_index() {
        let graph = line(&[1.0, 2.0, 3.0]);
        let state = best_first(&graph, 0, |_| 0.0, |node| node == 3).unwrap();

        assert_eq!(state.status, SearchStatus::Found);
        let goal_index = state.goal_index.unwrap();
        assert_eq!(state.node_map.get_index(goal_index).map(|(id, _)| *id), Some(3));
        assert_eq!(state.settled_cost(3), Some(6.0));
        assert_eq!(state.explored, 4);
    }

    #[test]
    fn test_exhausted_without_goal() {
        let graph = line(&[1.0, 1.0]);
        let state = best_first(&graph, 0, |_| 0.0, |_| false).unwrap();

        assert_eq!(state.status, SearchStatus::Exhausted);
        assert_eq!(state.goal_index, None);
        assert_eq!(state.explored, 3);
        assert_eq!(state.settled_cost(2), Some(2.0));
    }

    #[test]
    fn test_invalid_start() {
        let graph = line(&[1.0]);
        let result = best_first(&graph, 8, |_| 0.0, |_| true);

        assert!(matches!(result, Err(SearchError::InvalidNode { node: 8 })));
    }

    #[test]
    fn test_stale_entries_never_settle_twice() {
        // 0 reaches 2 first through an expensive direct edge, then finds the cheap
        // detour through 1, leaving a stale entry for 2 on the frontier
        let mut builder = Graph::builder();
        for id in 0..4 {
            builder.add_node(id, Point::new(id as f64, 0.0)).unwrap();
        }
        builder
            .add_edge_with_weight(0, 2, 10.0).unwrap()
            .add_edge_with_weight(0, 1, 1.0).unwrap()
            .add_edge_with_weight(1, 2, 1.0).unwrap()
            .add_edge_with_weight(2, 3, 1.0).unwrap();
        let graph = builder.build();

        let state = best_first(&graph, 0, |_| 0.0, |_| false).unwrap();

        assert_eq!(state.explored, graph.len());
        assert_eq!(state.settled_cost(2), Some(2.0));
        assert_eq!(state.settled_cost(3), Some(3.0));
        let (parent_index, _) = state.node_map[&2];
        assert_eq!(state.node_map.get_index(parent_index).map(|(id, _)| *id), Some(1));
    }

    #[test]
    fn test_start_is_goal() {
        let graph = line(&[4.0]);
        let state = best_first(&graph, 1, |_| 0.0, |node| node == 1).unwrap();

        assert_eq!(state.status, SearchStatus::Found);
        assert_eq!(state.explored, 1);
        assert_eq!(state.settled_cost(1), Some(0.0));
    }
}
