use grid_util::point::Point;

use crate::frontier::FifoFrontier;
use crate::search::SearchState;
use crate::solver::{GridSolver, Relaxation};
use crate::terrain_grid::TerrainGrid;

/// Breadth-first search. Terrain costs only decide passability here; the route found has the
/// fewest steps, and its cost is reported afterwards.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver {
    pub relaxation: Relaxation,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver::default()
    }
    pub fn with_relaxation(relaxation: Relaxation) -> BfsSolver {
        BfsSolver { relaxation }
    }
}

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn new_frontier(&self, start: Point) -> Self::Frontier {
        let mut frontier = FifoFrontier::new();
        frontier.push_back(start);
        frontier
    }

    fn expand(
        &self,
        grid: &TerrainGrid,
        state: &mut SearchState,
        frontier: &mut Self::Frontier,
        current: Point,
        _goal: Point,
    ) {
        for n in grid.neighbors(&current) {
            let update = match self.relaxation {
                Relaxation::Reference => !state.is_visited(&n),
                Relaxation::Improving => !state.is_discovered(&n),
            };
            if update {
                state.set_parent(n, current);
                frontier.push_back(n);
            }
        }
    }
}
