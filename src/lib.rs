//! Shortest paths on jittered grid graphs.
//!
//! A [`grid::generate_grid`] call lays nodes out on a lattice, nudges each by a
//! random offset and links every node to its up to 8 lattice neighbors with
//! edges weighted by Euclidean distance. [`find_path`] then searches the graph
//! with Dijkstra or A*, and [`compare`] runs both on the same endpoints so their
//! exploration counts and timings can be put side by side.
//!
//! ```
//! use gridnav::{compare, grid::{generate_grid_seeded, GridConfig}};
//!
//! let config = GridConfig::new(10, 10).with_jitter(0.3);
//! let graph = generate_grid_seeded(&config, 7).unwrap();
//!
//! let comparison = compare(&graph, 0, config.node_id(9, 9)).unwrap();
//! assert!((comparison.dijkstra.distance - comparison.astar.distance).abs() < 1e-9);
//! assert!(comparison.astar.nodes_explored <= comparison.dijkstra.nodes_explored);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod grid;

pub use errors::{ErrorKind, ErrorReport, SearchError};
pub use geometry::Point;
pub use graph::{Edge, Graph, GraphBuilder, GraphSpec, NodeId};
pub use graph_algos::{compare, find_path, Algorithm, Comparison, PathResult};
pub use grid::{generate_grid, generate_grid_seeded, GridConfig};

/// The types and entry points most callers need
pub mod prelude {
    pub use crate::errors::{ErrorKind, ErrorReport, SearchError};
    pub use crate::geometry::Point;
    pub use crate::graph::{Edge, Graph, GraphBuilder, GraphSpec, NodeId};
    pub use crate::graph_algos::{compare, find_path, Algorithm, AStar, Comparison, Heuristic, PathResult};
    pub use crate::grid::{generate_grid, generate_grid_seeded, GridConfig};
}
