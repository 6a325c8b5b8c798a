use grid_util::point::Point;
use itertools::Itertools;

use crate::costs::Cost;
use crate::error::{PathfindingError, Result};
use crate::search::SearchState;
use crate::terrain_grid::TerrainGrid;

/// Follows the predecessor links from `goal` back to `start` and returns the cells in travel
/// order, start excluded and goal included, together with the sum of their terrain costs.
///
/// Every link points to a discovered point, so a chain longer than the number of discovered
/// points must contain a cycle; both that and a missing link are reported as
/// [PathfindingError::BrokenPath].
pub fn reconstruct_path(
    grid: &TerrainGrid,
    state: &SearchState,
    start: Point,
    goal: Point,
) -> Result<(Vec<Point>, Cost)> {
    let mut path = Vec::new();
    let mut cost: Cost = 0;
    let mut current = goal;
    while current != start {
        if path.len() >= state.len() {
            return Err(PathfindingError::BrokenPath(current));
        }
        cost = cost.saturating_add(grid.cost(current)?);
        path.push(current);
        current = state
            .parent(&current)
            .ok_or(PathfindingError::BrokenPath(current))?;
    }
    path.reverse();
    Ok((path, cost))
}

/// Sum of the terrain costs of the given cells.
pub fn path_cost(grid: &TerrainGrid, path: &[Point]) -> Result<Cost> {
    path.iter()
        .map(|p| grid.cost(*p))
        .fold_ok(0, |acc: Cost, c| acc.saturating_add(c))
}

/// Checks that `path` continues from `start` with unit orthogonal steps only.
pub fn is_contiguous(start: Point, path: &[Point]) -> bool {
    std::iter::once(&start)
        .chain(path)
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_grid, CostTable};

    #[test]
    fn reconstructs_in_travel_order() {
        // |Ag.|
        // |..B|
        let grid = parse_grid("Ag.\n..B", &CostTable::default()).unwrap();
        let start = grid.start();
        let a = Point::new(1, 0);
        let b = Point::new(2, 0);
        let goal = grid.goal();
        let mut state = SearchState::new(start);
        state.set_parent(a, start);
        state.set_parent(b, a);
        state.set_parent(goal, b);
        let (path, cost) = reconstruct_path(&grid, &state, start, goal).unwrap();
        assert_eq!(path, vec![a, b, goal]);
        assert_eq!(cost, 5 + 1 + 1);
        assert!(is_contiguous(start, &path));
        assert_eq!(path_cost(&grid, &path).unwrap(), cost);
    }

    #[test]
    fn start_equal_to_goal_gives_empty_path() {
        let grid = parse_grid("AB", &CostTable::default()).unwrap();
        let state = SearchState::new(grid.start());
        let (path, cost) = reconstruct_path(&grid, &state, grid.start(), grid.start()).unwrap();
        assert!(path.is_empty());
        assert_eq!(cost, 0);
    }

    #[test]
    fn missing_link_is_reported() {
        let grid = parse_grid("A.B", &CostTable::default()).unwrap();
        let state = SearchState::new(grid.start());
        assert!(matches!(
            reconstruct_path(&grid, &state, grid.start(), grid.goal()),
            Err(PathfindingError::BrokenPath(p)) if p == grid.goal()
        ));
    }

    #[test]
    fn cycles_are_reported() {
        let grid = parse_grid("A..\n..B", &CostTable::default()).unwrap();
        let a = Point::new(1, 1);
        let mut state = SearchState::new(grid.start());
        state.set_parent(grid.goal(), a);
        state.set_parent(a, grid.goal());
        assert!(matches!(
            reconstruct_path(&grid, &state, grid.start(), grid.goal()),
            Err(PathfindingError::BrokenPath(_))
        ));
    }

    #[test]
    fn contiguity() {
        let start = Point::new(0, 0);
        assert!(is_contiguous(start, &[]));
        assert!(is_contiguous(start, &[Point::new(0, 1), Point::new(1, 1)]));
        assert!(!is_contiguous(start, &[Point::new(1, 1)]));
        assert!(!is_contiguous(start, &[Point::new(0, 1), Point::new(0, 1)]));
    }

    #[test]
    fn cost_of_out_of_bounds_path_fails() {
        let grid = parse_grid("AB", &CostTable::default()).unwrap();
        assert!(path_cost(&grid, &[Point::new(3, 3)]).is_err());
    }
}
