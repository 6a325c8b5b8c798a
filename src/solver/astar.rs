use grid_util::point::Point;

use crate::costs::Cost;
use crate::frontier::PriorityFrontier;
use crate::search::SearchState;
use crate::solver::{expand_weighted, GridSolver, Relaxation};
use crate::terrain_grid::TerrainGrid;

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 give weighted A*, which expands fewer cells but
    /// may return costlier routes.
    pub heuristic_factor: f32,
    pub relaxation: Relaxation,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            relaxation: Relaxation::default(),
        }
    }
    pub fn with_relaxation(relaxation: Relaxation) -> AstarSolver {
        AstarSolver {
            relaxation,
            ..AstarSolver::new()
        }
    }

    /// Manhattan distance times the heuristic factor. Every passable cell costs at least one,
    /// so with a factor of 1.0 this never overestimates.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> Cost {
        let distance = (p1.x - p2.x).abs() + (p1.y - p2.y).abs();
        (distance as f32 * self.heuristic_factor) as Cost
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<Cost>;

    fn name(&self) -> &'static str {
        "A*"
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
        goal: Point,
    ) {
        expand_weighted(grid, state, frontier, current, self.relaxation, |n| {
            Some(self.heuristic(n, &goal))
        });
    }
}
