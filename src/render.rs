use core::fmt;

use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;

use crate::search::SearchResult;
use crate::terrain_grid::TerrainGrid;
use crate::{FRONTIER_MARKER, PATH_MARKER, VISITED_MARKER};

/// Draws a search result on top of the terrain. Start and goal keep their own symbols, path
/// cells become [PATH_MARKER], and with `show_sets` the remaining visited and frontier cells
/// become [VISITED_MARKER] and [FRONTIER_MARKER].
pub struct Overlay<'a> {
    grid: &'a TerrainGrid,
    path: FxHashSet<Point>,
    visited: FxHashSet<Point>,
    frontier: FxHashSet<Point>,
}

impl<'a> Overlay<'a> {
    pub fn new(grid: &'a TerrainGrid, result: &SearchResult, show_sets: bool) -> Overlay<'a> {
        let (visited, frontier) = if show_sets {
            (
                result.visited().copied().collect(),
                result.frontier.iter().copied().collect(),
            )
        } else {
            (FxHashSet::default(), FxHashSet::default())
        };
        Overlay {
            grid,
            path: result.path.iter().copied().collect(),
            visited,
            frontier,
        }
    }

    fn symbol(&self, p: Point, terrain: char) -> char {
        if p == self.grid.start() || p == self.grid.goal() {
            terrain
        } else if self.path.contains(&p) {
            PATH_MARKER
        } else if self.visited.contains(&p) {
            VISITED_MARKER
        } else if self.frontier.contains(&p) {
            FRONTIER_MARKER
        } else {
            terrain
        }
    }
}

impl fmt::Display for Overlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            let line = row
                .iter()
                .enumerate()
                .map(|(x, cell)| self.symbol(Point::new(x as i32, y as i32), cell.symbol))
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::bfs::BfsSolver;
    use crate::solver::GridSolver;
    use crate::{parse_grid, CostTable};

    #[test]
    fn path_only() {
        let grid = parse_grid("A..\n##.\n..B", &CostTable::default()).unwrap();
        let result = BfsSolver::new().solve(&grid).unwrap();
        let text = Overlay::new(&grid, &result, false).to_string();
        assert_eq!(text, "AOO\n##O\n..B\n");
    }

    #[test]
    fn sets_are_marked() {
        // The start, (0, 1), (1, 0) and (1, 1) are closed before the goal is popped, while
        // (2, 1) is still queued.
        let grid = parse_grid("A.B\n...", &CostTable::default()).unwrap();
        let result = BfsSolver::new().search(&grid).unwrap();
        assert_eq!(Overlay::new(&grid, &result, true).to_string(), "AOB\nxx*\n");
        assert_eq!(Overlay::new(&grid, &result, false).to_string(), "AOB\n...\n");
    }
}
