use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SearchError};
use crate::graph::{Graph, NodeId};
use super::best_first::SearchState;
use super::shortest_path::{path_cost, shortest_path};


/// Search strategy requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    /// A* guided by straight line distance to the goal
    #[serde(rename = "astar")]
    AStar,
    /// A* guided by axis aligned distance, not admissible once diagonal edges exist
    #[serde(rename = "astar_manhattan")]
    AStarManhattan,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::AStarManhattan => "astar_manhattan",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Outcome of one path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Nodes from start to end, both included
    pub path: Vec<NodeId>,
    /// Sum of the edge weights along `path`
    pub distance: f64,
    pub nodes_explored: usize,
    /// Wall clock time of the search alone, milliseconds rounded to 4 decimals
    pub time_ms: f64,
    pub algorithm: Algorithm,
}

impl PathResult {
    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[Cost = {:.4}, explored = {}]: ", self.algorithm, self.distance, self.nodes_explored)?;
        let mut steps = self.path.iter();
        match steps.next() {
            None => write!(f, "<empty>"),
            Some(first) => {
                write!(f, "{first}")?;
                for step in steps {
                    write!(f, " -> {step}")?;
                }
                Ok(())
            }
        }
    }
}


/// Dijkstra and A* run independently over the same graph and endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub dijkstra: PathResult,
    pub astar: PathResult,
}

impl Comparison {
    /// Nodes Dijkstra settled that A* did not need
    pub fn nodes_saved(&self) -> isize {
        self.dijkstra.nodes_explored as isize - self.astar.nodes_explored as isize
    }
}


/// Package a finished search into a `PathResult`
pub(crate) fn build_result(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    algorithm: Algorithm,
    state: &SearchState,
    elapsed: Duration,
) -> Result<PathResult> {
    let not_found = SearchError::PathNotFound { start, end };

    let goal_index = state.goal_index.ok_or_else(|| not_found.clone())?;
    let path = shortest_path(&state.node_map, goal_index).ok_or(not_found)?;
    let distance = path_cost(graph, &path)?;

    Ok(PathResult {
        path,
        distance,
        nodes_explored: state.explored,
        time_ms: round_ms(elapsed),
        algorithm,
    })
}

fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 10_000.0).round() / 10_000.0
}
