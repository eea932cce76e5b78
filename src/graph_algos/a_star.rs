use crate::errors::Result;
use crate::geometry::Point;
use crate::graph::{Graph, NodeId};
use super::result::{Algorithm, PathResult};
use super::run_search;


/// Estimate of the remaining cost from a node to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Straight line distance, admissible and consistent when edges weigh at
    /// least the distance between their endpoints
    #[default]
    Euclidean,
    /// Axis aligned distance, overestimates across diagonal edges so paths may
    /// come back longer than optimal
    Manhattan,
}

impl Heuristic {
    pub fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        match self {
            Heuristic::Euclidean => from.distance(goal),
            Heuristic::Manhattan => from.manhattan(goal),
        }
    }

    fn algorithm(&self) -> Algorithm {
        match self {
            Heuristic::Euclidean => Algorithm::AStar,
            Heuristic::Manhattan => Algorithm::AStarManhattan,
        }
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    heuristic: Heuristic,
}

impl AStar {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// From start node, search toward end guided by the heuristic
    /// The result is optimal as long as the heuristic never overestimates the
    /// true remaining cost
    pub fn plan(&self, graph: &Graph, start: NodeId, end: NodeId) -> Result<PathResult> {
        let heuristic = self.heuristic;
        // goal position is looked up once, run_search validates both ends
        let goal = graph.position(end).ok();

        run_search(graph, start, end, heuristic.algorithm(), |node| {
            match (goal, graph.position(node)) {
                (Some(goal), Ok(here)) => heuristic.estimate(&here, &goal),
                _ => 0.0,
            }
        })
    }
}
