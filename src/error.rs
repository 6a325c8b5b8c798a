//! Error types for loading grids and searching them

use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathfindingError {
    #[error("grid has no '{0}' marker")]
    MissingMarker(char),

    #[error("marker '{marker}' occurs more than once, again at ({}, {})", .at.x, .at.y)]
    DuplicateMarker { marker: char, at: Point },

    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid contains no cells")]
    EmptyGrid,

    #[error("unknown terrain symbol '{symbol}' at ({}, {})", .at.x, .at.y)]
    UnknownTerrain { symbol: char, at: Point },

    #[error("no path from start to goal")]
    NoPathFound,

    #[error("({}, {}) lies outside the grid", .0.x, .0.y)]
    InvalidGridReference(Point),

    #[error("predecessor chain is broken at ({}, {})", .0.x, .0.y)]
    BrokenPath(Point),

    #[error("could not read grid: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
