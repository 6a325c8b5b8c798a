//! Reads text boards: one row per line, one terrain symbol per character.
use std::fs;
use std::path::Path;

use grid_util::point::Point;
use log::debug;

use crate::costs::CostTable;
use crate::error::{PathfindingError, Result};
use crate::terrain_grid::{Cell, TerrainGrid};
use crate::{GOAL_MARKER, START_MARKER};

/// Parses a board. Every symbol must be present in `costs`, and the start and goal markers must
/// each occur exactly once. Trailing empty lines are ignored.
pub fn parse_grid(text: &str, costs: &CostTable) -> Result<TerrainGrid> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let mut start: Option<Point> = None;
    let mut goal: Option<Point> = None;
    let mut rows = Vec::with_capacity(lines.len());
    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, symbol) in line.chars().enumerate() {
            let at = Point::new(x as i32, y as i32);
            let cost = costs
                .get(symbol)
                .ok_or(PathfindingError::UnknownTerrain { symbol, at })?;
            let marker = match symbol {
                START_MARKER => Some(&mut start),
                GOAL_MARKER => Some(&mut goal),
                _ => None,
            };
            if let Some(slot) = marker {
                if slot.replace(at).is_some() {
                    return Err(PathfindingError::DuplicateMarker { marker: symbol, at });
                }
            }
            row.push(Cell::new(symbol, cost));
        }
        rows.push(row);
    }

    if rows.iter().all(|r| r.is_empty()) {
        return Err(PathfindingError::EmptyGrid);
    }
    let start = start.ok_or(PathfindingError::MissingMarker(START_MARKER))?;
    let goal = goal.ok_or(PathfindingError::MissingMarker(GOAL_MARKER))?;
    debug!("Parsed {} rows, start {:?}, goal {:?}", rows.len(), start, goal);
    TerrainGrid::new(rows, start, goal)
}

/// Reads and parses the board stored at `path`.
pub fn load_grid<P: AsRef<Path>>(path: P, costs: &CostTable) -> Result<TerrainGrid> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("Loaded board {}", path.as_ref().display());
    parse_grid(&text, costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<TerrainGrid> {
        parse_grid(text, &CostTable::default())
    }

    #[test]
    fn parses_markers_and_costs() {
        let grid = parse("A.w\nmfB\r\n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.goal(), Point::new(2, 1));
        assert_eq!(grid.cost(Point::new(2, 0)).unwrap(), 100);
        assert_eq!(grid.cost(Point::new(0, 1)).unwrap(), 50);
        assert_eq!(grid.cell(Point::new(1, 1)).unwrap(), Cell::new('f', 10));
    }

    #[test]
    fn missing_markers() {
        assert!(matches!(
            parse("...\n..B"),
            Err(PathfindingError::MissingMarker(START_MARKER))
        ));
        assert!(matches!(
            parse("A..\n..."),
            Err(PathfindingError::MissingMarker(GOAL_MARKER))
        ));
    }

    #[test]
    fn duplicate_marker() {
        match parse("A.A\n..B") {
            Err(PathfindingError::DuplicateMarker { marker, at }) => {
                assert_eq!(marker, START_MARKER);
                assert_eq!(at, Point::new(2, 0));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(
            parse("A..\n.\n..B"),
            Err(PathfindingError::MalformedGrid {
                row: 1,
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn unknown_symbol_and_empty_input() {
        assert!(matches!(
            parse("A?B"),
            Err(PathfindingError::UnknownTerrain { symbol: '?', .. })
        ));
        assert!(matches!(parse(""), Err(PathfindingError::EmptyGrid)));
        assert!(matches!(parse("\n\n"), Err(PathfindingError::EmptyGrid)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_grid("does/not/exist.txt", &CostTable::default());
        assert!(matches!(result, Err(PathfindingError::Io(_))));
    }
}
