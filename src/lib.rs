//! # terrain_pathfinding
//!
//! Shortest routes on weighted terrain grids. Every cell carries a terrain symbol whose
//! traversal cost is looked up in a [CostTable]; a cost of zero marks a wall. Three solvers
//! share one [TerrainGrid] and one search loop:
//!
//! - [AstarSolver](solver::astar::AstarSolver), ordered by `g + h` with the
//!   [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as `h`,
//! - [DijkstraSolver](solver::dijkstra::DijkstraSolver), ordered by `g` alone,
//! - [BfsSolver](solver::bfs::BfsSolver), a plain FIFO flood that ignores terrain cost.
//!
//! Movement is restricted to the 4-neighbourhood. Search state lives in a per-run
//! [SearchState](search::SearchState), so the grid itself is never mutated and a solver can be
//! run any number of times on the same grid.
//!
//! ```
//! use terrain_pathfinding::{parse_grid, Algorithm, CostTable, Relaxation};
//!
//! let grid = parse_grid("A..\n.#.\n..B", &CostTable::default()).unwrap();
//! let result = Algorithm::AStar.solve(&grid, Relaxation::default()).unwrap();
//! assert_eq!(result.cost, 4);
//! assert_eq!(result.path.len(), 4);
//! ```
pub mod costs;
pub mod error;
pub mod frontier;
pub mod loader;
pub mod path;
pub mod render;
pub mod search;
pub mod solver;
pub mod terrain_grid;

pub use costs::{Cost, CostTable};
pub use error::{PathfindingError, Result};
pub use grid_util::point::Point;
pub use loader::{load_grid, parse_grid};
pub use render::Overlay;
pub use search::{SearchResult, SearchState};
pub use solver::{Algorithm, GridSolver, Relaxation};
pub use terrain_grid::TerrainGrid;

/// Symbol marking the unique start cell.
pub const START_MARKER: char = 'A';
/// Symbol marking the unique goal cell.
pub const GOAL_MARKER: char = 'B';
/// Symbol of the impassable wall terrain in the default [CostTable].
pub const WALL: char = '#';
/// Overlay symbol for cells on the reconstructed path.
pub const PATH_MARKER: char = 'O';
/// Overlay symbol for expanded cells.
pub const VISITED_MARKER: char = 'x';
/// Overlay symbol for cells still waiting in the frontier.
pub const FRONTIER_MARKER: char = '*';

/// Orthogonal moves only, so at most four neighbours are ever produced.
pub(crate) const N_SMALLVEC_SIZE: usize = 4;
