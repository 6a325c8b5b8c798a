use grid_util::point::Point;

use crate::costs::Cost;
use crate::frontier::PriorityFrontier;
use crate::search::SearchState;
use crate::solver::{expand_weighted, GridSolver, Relaxation};
use crate::terrain_grid::TerrainGrid;

/// Least-cost search: A* without a heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub relaxation: Relaxation,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
    pub fn with_relaxation(relaxation: Relaxation) -> DijkstraSolver {
        DijkstraSolver { relaxation }
    }
}

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier<Cost>;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn new_frontier(&self, start: Point) -> Self::Frontier {
        PriorityFrontier::starting_at(start)
    }

    fn expand(
        &self,
        grid: &TerrainGrid,
        state: &mut SearchState,
        frontier: &mut Self::Frontier,
        current: Point,
        _goal: Point,
    ) {
        expand_weighted(grid, state, frontier, current, self.relaxation, |_| None);
    }
}
