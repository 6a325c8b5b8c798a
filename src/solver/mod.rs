use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::costs::Cost;
use crate::error::{PathfindingError, Result};
use crate::frontier::Frontier;
use crate::search::{run_search, SearchResult, SearchState};
use crate::terrain_grid::TerrainGrid;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// How a neighbour that has been seen before is treated during expansion. Neither policy ever
/// reopens a visited point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relaxation {
    /// Every neighbour that is not yet visited takes the current point as its predecessor and
    /// is pushed again, even if it was already reached more cheaply. Visited neighbours are only
    /// updated when the new cost is strictly lower. This reproduces the classic reference
    /// behaviour and can return costlier routes than necessary.
    #[default]
    Reference,
    /// A discovered neighbour is only updated when the new cost is strictly lower, and breadth
    /// first search keeps the first predecessor found. A* and Dijkstra then return least-cost
    /// routes.
    Improving,
}

pub trait GridSolver {
    type Frontier: Frontier<Cost>;

    fn name(&self) -> &'static str;

    /// Creates the open set holding only `start`.
    fn new_frontier(&self, start: Point) -> Self::Frontier;

    /// Considers every passable neighbour of `current`, updating `state` and pushing onto
    /// `frontier` as the solver sees fit. `current` is marked visited by the caller afterwards.
    fn expand(
        &self,
        grid: &TerrainGrid,
        state: &mut SearchState,
        frontier: &mut Self::Frontier,
        current: Point,
        goal: Point,
    );

    /// Runs the search until the goal is popped or the frontier is exhausted.
    fn search(&self, grid: &TerrainGrid) -> Result<SearchResult> {
        run_search(self, grid)
    }

    /// Like [search](Self::search), but first consults the connected components of the grid so
    /// that an unreachable goal is rejected without flooding the grid.
    fn solve(&self, grid: &TerrainGrid) -> Result<SearchResult> {
        let (start, goal) = (grid.start(), grid.goal());
        if grid.unreachable(&start, &goal) {
            info!("{:?} is not reachable from {:?}", goal, start);
            return Err(PathfindingError::NoPathFound);
        }
        info!("{:?} is reachable from {:?}, computing path", goal, start);
        self.search(grid)
    }

    /// The path of [solve](Self::solve), if there is one.
    fn get_path(&self, grid: &TerrainGrid) -> Option<Vec<Point>> {
        self.solve(grid).ok().map(|r| r.path)
    }
}

/// Expansion shared by the cost-ordered solvers. `heuristic` gives the estimate added to `g` to
/// form the priority; when it returns [None] the priority is `g` itself and no `f` is stored.
pub(crate) fn expand_weighted<F, H>(
    grid: &TerrainGrid,
    state: &mut SearchState,
    frontier: &mut F,
    current: Point,
    relaxation: Relaxation,
    mut heuristic: H,
) where
    F: Frontier<Cost>,
    H: FnMut(&Point) -> Option<Cost>,
{
    let current_g = state.g(&current);
    for (n, step_cost) in grid.neighborhood_points_and_cost(&current) {
        let g = current_g.saturating_add(step_cost);
        let visited = state.is_visited(&n);
        let update = match relaxation {
            Relaxation::Reference => !visited || g < state.g(&n),
            Relaxation::Improving => state.node(&n).map_or(true, |node| g < node.g),
        };
        if !update {
            continue;
        }
        let f = heuristic(&n).map(|h| g.saturating_add(h));
        state.update(n, current, g, f);
        if !visited {
            frontier.push(n, f.unwrap_or(g));
        }
    }
}

/// The three solvers by name, for callers that pick one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    AStar,
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dijkstra];

    /// Runs the matching solver with default settings and the given relaxation policy.
    pub fn solve(self, grid: &TerrainGrid, relaxation: Relaxation) -> Result<SearchResult> {
        match self {
            Algorithm::AStar => AstarSolver::with_relaxation(relaxation).solve(grid),
            Algorithm::Bfs => BfsSolver::with_relaxation(relaxation).solve(grid),
            Algorithm::Dijkstra => DijkstraSolver::with_relaxation(relaxation).solve(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::AStar => "A*",
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(format!("unknown algorithm '{}'", other)),
        }
    }
}
