use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::{IndexMap, IndexSet};
use log::{debug, info};

use crate::costs::Cost;
use crate::error::{PathfindingError, Result};
use crate::frontier::Frontier;
use crate::path::reconstruct_path;
use crate::solver::GridSolver;
use crate::terrain_grid::TerrainGrid;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Per-cell bookkeeping of a single search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchNode {
    /// Accumulated cost from the start. Breadth-first search leaves this at zero.
    pub g: Cost,
    /// `g` plus the heuristic estimate; only the A* solver assigns it.
    pub f: Option<Cost>,
    pub parent: Option<Point>,
}

/// All mutable state of one search, keyed by coordinate. Nodes are kept in discovery order and
/// the visited set in expansion order.
#[derive(Clone, Debug)]
pub struct SearchState {
    nodes: FxIndexMap<Point, SearchNode>,
    visited: FxIndexSet<Point>,
}

impl SearchState {
    /// Fresh state in which only `start` is known, at cost zero.
    pub fn new(start: Point) -> SearchState {
        let mut nodes = FxIndexMap::default();
        nodes.insert(start, SearchNode::default());
        SearchState {
            nodes,
            visited: FxIndexSet::default(),
        }
    }

    pub fn node(&self, p: &Point) -> Option<&SearchNode> {
        self.nodes.get(p)
    }
    /// Accumulated cost of `p`, zero for undiscovered points.
    pub fn g(&self, p: &Point) -> Cost {
        self.node(p).map_or(0, |n| n.g)
    }
    pub fn parent(&self, p: &Point) -> Option<Point> {
        self.node(p).and_then(|n| n.parent)
    }
    pub fn is_discovered(&self, p: &Point) -> bool {
        self.nodes.contains_key(p)
    }
    pub fn is_visited(&self, p: &Point) -> bool {
        self.visited.contains(p)
    }
    /// Number of discovered points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records a new predecessor and costs for `p`, discovering it if needed.
    pub fn update(&mut self, p: Point, parent: Point, g: Cost, f: Option<Cost>) {
        let node = self.nodes.entry(p).or_default();
        node.parent = Some(parent);
        node.g = g;
        node.f = f;
    }
    /// Records a new predecessor for `p` and leaves its costs untouched.
    pub fn set_parent(&mut self, p: Point, parent: Point) {
        self.nodes.entry(p).or_default().parent = Some(parent);
    }
    /// Moves `p` into the visited set. Returns false if it was already there.
    pub fn mark_visited(&mut self, p: Point) -> bool {
        self.visited.insert(p)
    }

    /// Visited points in the order they were expanded.
    pub fn visited(&self) -> impl Iterator<Item = &Point> + '_ {
        self.visited.iter()
    }
    /// Discovered points and their nodes in the order they were discovered.
    pub fn nodes(&self) -> impl Iterator<Item = (&Point, &SearchNode)> + '_ {
        self.nodes.iter()
    }
}

/// Outcome of a search that reached the goal.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Cells from the first step after the start up to and including the goal.
    pub path: Vec<Point>,
    /// Sum of the terrain costs of the cells in `path`.
    pub cost: Cost,
    /// Entries left in the frontier, in pop order. Stale duplicates are kept.
    pub frontier: Vec<Point>,
    pub state: SearchState,
}

impl SearchResult {
    pub fn visited(&self) -> impl Iterator<Item = &Point> + '_ {
        self.state.visited()
    }
    pub fn visited_count(&self) -> usize {
        self.state.visited.len()
    }
}

/// The loop shared by all solvers: pop, skip closed points, stop at the goal, otherwise let the
/// solver expand the point and close it. Fails with [PathfindingError::NoPathFound] once the
/// frontier runs dry.
pub fn run_search<S: GridSolver + ?Sized>(solver: &S, grid: &TerrainGrid) -> Result<SearchResult> {
    let start = grid.start();
    let goal = grid.goal();
    let mut state = SearchState::new(start);
    let mut frontier = solver.new_frontier(start);
    while let Some(current) = frontier.pop() {
        if state.is_visited(&current) {
            continue;
        }
        if current == goal {
            let (path, cost) = reconstruct_path(grid, &state, start, goal)?;
            info!(
                "{} reached goal with cost {} after expanding {} cells",
                solver.name(),
                cost,
                state.visited.len()
            );
            return Ok(SearchResult {
                path,
                cost,
                frontier: frontier.into_points(),
                state,
            });
        }
        solver.expand(grid, &mut state, &mut frontier, current, goal);
        state.mark_visited(current);
    }
    debug!(
        "{} exhausted the frontier after expanding {} cells",
        solver.name(),
        state.visited.len()
    );
    Err(PathfindingError::NoPathFound)
}
