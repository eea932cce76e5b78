//! Jittered lattice generation
//!
//! Nodes sit on a `rows x cols` lattice, each nudged by a random offset so the
//! rendered grid looks organic. Every node links to its orthogonal and diagonal
//! lattice neighbors (up to 8), and each edge weighs the Euclidean distance
//! between its jittered endpoints, so straight line distance stays an
//! admissible and consistent A* heuristic.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::errors::{Result, SearchError};
use crate::geometry::Point;
use crate::graph::{Graph, GraphBuilder, NodeId};

/// Lattice offsets of the neighbors that come after a node in row-major order
/// Linking only "forward" adds each undirected edge exactly once
const FORWARD_NEIGHBORS: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// Jitter must stay below half a cell so lattice neighbors never coincide.
/// A wider jitter lets neighbors land on the same point, and the zero length
/// edge between them would be skipped, which can disconnect the grid.
pub const MAX_JITTER: f64 = 0.5;

/// Upper bound on `rows * cols`, checked before any node is allocated
pub const MAX_NODES: usize = 1 << 22;


/// Grid generation settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Maximum offset along each axis, as a fraction of `cell_size`
    pub jitter: f64,
    /// Spacing between lattice points
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            jitter: 0.3,
            cell_size: 1.0,
        }
    }
}

impl GridConfig {

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Default::default() }
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Node id of a lattice coordinate, row-major
    pub fn node_id(&self, row: usize, col: usize) -> NodeId {
        row * self.cols + col
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows < 2 || self.cols < 2 {
            return Err(SearchError::invalid_grid(format!(
                "grid must be at least 2 x 2, got {} x {}", self.rows, self.cols
            )));
        }
        match self.rows.checked_mul(self.cols) {
            Some(nodes) if nodes <= MAX_NODES => {}
            _ => {
                return Err(SearchError::invalid_grid(format!(
                    "grid of {} x {} exceeds {MAX_NODES} nodes", self.rows, self.cols
                )));
            }
        }
        if !(0.0..MAX_JITTER).contains(&self.jitter) {
            return Err(SearchError::invalid_grid(format!(
                "jitter must be in [0, {MAX_JITTER}), got {}", self.jitter
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SearchError::invalid_grid(format!(
                "cell size must be positive and finite, got {}", self.cell_size
            )));
        }
        // every position and edge length is bounded by the jittered lattice diagonal
        let span = (self.rows as f64 + 1.0).hypot(self.cols as f64 + 1.0) * self.cell_size;
        if !span.is_finite() {
            return Err(SearchError::invalid_grid(format!(
                "cell size {} is too large for a {} x {} grid", self.cell_size, self.rows, self.cols
            )));
        }
        Ok(())
    }
}


/// Generate a jittered grid graph, drawing offsets from `rng`
pub fn generate_grid<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Graph> {
    config.validate()?;

    let mut builder = GraphBuilder::with_capacity(config.node_count());
    let mut positions = Vec::with_capacity(config.node_count());
    let cell = config.cell_size;

    for row in 0..config.rows {
        for col in 0..config.cols {
            let dx = jitter_offset(rng, config.jitter);
            let dy = jitter_offset(rng, config.jitter);
            let position = Point::new(
                (col as f64 + dx) * cell,
                (row as f64 + dy) * cell,
            );
            builder.add_node(config.node_id(row, col), position)?;
            positions.push(position);
        }
    }

    let mut skipped = 0usize;
    for row in 0..config.rows {
        for col in 0..config.cols {
            let id = config.node_id(row, col);
            for (d_row, d_col) in FORWARD_NEIGHBORS {
                let Some((n_row, n_col)) = offset(config, row, col, d_row, d_col) else {
                    continue;
                };
                let neighbor = config.node_id(n_row, n_col);
                if positions[id].distance(&positions[neighbor]) == 0.0 {
                    warn!("skipping degenerate edge {id} - {neighbor}");
                    skipped += 1;
                    continue;
                }
                builder.add_edge(id, neighbor)?;
            }
        }
    }

    let graph = builder.build();
    debug!(
        "generated {}x{} grid: {} nodes, {} edges, {} skipped",
        config.rows, config.cols, graph.len(), graph.edge_count(), skipped
    );
    Ok(graph)
}

/// Generate a grid from a fixed seed, identical for identical inputs
pub fn generate_grid_seeded(config: &GridConfig, seed: u64) -> Result<Graph> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_grid(config, &mut rng)
}

fn jitter_offset<R: Rng>(rng: &mut R, jitter: f64) -> f64 {
    if jitter == 0.0 {
        return 0.0;
    }
    rng.random_range(-jitter..=jitter)
}

fn offset(config: &GridConfig, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    (row < config.rows && col < config.cols).then_some((row, col))
}
