//! Batch runner for the terrain_pathfinding solvers: reads boards, run manifests and cost tables
//! from disk, runs the requested solver and prints the annotated board.
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::{error, info};
use serde::Deserialize;
use terrain_pathfinding::solver::{
    astar::AstarSolver, bfs::BfsSolver, dijkstra::DijkstraSolver, GridSolver,
};
use terrain_pathfinding::{
    load_grid, Algorithm, Cost, CostTable, Overlay, PathfindingError, Relaxation, SearchResult,
    TerrainGrid,
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Pathfinding(#[from] PathfindingError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("manifest row {row}: {message}")]
    Manifest { row: usize, message: String },

    #[error("could not walk board directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;

/// One solver invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSpec {
    pub algorithm: Algorithm,
    pub board: PathBuf,
    pub show_sets: bool,
    /// Overrides [Settings::relaxation] for this run.
    pub relaxation: Option<Relaxation>,
}

impl RunSpec {
    pub fn new(algorithm: Algorithm, board: PathBuf, show_sets: bool) -> RunSpec {
        RunSpec {
            algorithm,
            board,
            show_sets,
            relaxation: None,
        }
    }
}

/// Options shared by every run of a batch.
#[derive(Clone, Debug)]
pub struct Settings {
    pub costs: CostTable,
    pub relaxation: Relaxation,
    pub heuristic_factor: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            costs: CostTable::default(),
            relaxation: Relaxation::default(),
            heuristic_factor: 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    algorithm: String,
    board: PathBuf,
    #[serde(default)]
    show_sets: bool,
    #[serde(default)]
    relaxation: Option<Relaxation>,
}

#[derive(Debug, Deserialize)]
struct CostRecord {
    symbol: char,
    cost: Cost,
}

/// Parses a manifest with the header `algorithm,board,show_sets[,relaxation]`. Relative board
/// paths are resolved against `base_dir`.
pub fn parse_manifest<R: Read>(reader: R, base_dir: &Path) -> Result<Vec<RunSpec>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut specs = Vec::new();
    for (i, record) in csv_reader.deserialize().enumerate() {
        let record: ManifestRecord = record?;
        // Header is line 1.
        let row = i + 2;
        let algorithm = record
            .algorithm
            .parse::<Algorithm>()
            .map_err(|message| DriverError::Manifest { row, message })?;
        specs.push(RunSpec {
            algorithm,
            board: base_dir.join(record.board),
            show_sets: record.show_sets,
            relaxation: record.relaxation,
        });
    }
    Ok(specs)
}

/// Reads the manifest at `path`; boards are looked up next to it.
pub fn load_manifest(path: &Path) -> Result<Vec<RunSpec>> {
    let file = File::open(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_manifest(file, base_dir)
}

/// Parses a `symbol,cost` table. Symbols missing from it are unknown terrain, so a custom table
/// has to list the start and goal markers too.
pub fn parse_cost_table<R: Read>(reader: R) -> Result<CostTable> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut table = CostTable::empty();
    for record in csv_reader.deserialize() {
        let record: CostRecord = record?;
        table.insert(record.symbol, record.cost);
    }
    Ok(table)
}

pub fn load_cost_table(path: &Path) -> Result<CostTable> {
    parse_cost_table(File::open(path)?)
}

/// All `.txt` boards below `root`, sorted by path.
pub fn find_boards(root: &Path) -> Result<Vec<PathBuf>> {
    let mut boards = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "txt") {
            boards.push(path.to_path_buf());
        }
    }
    boards.sort();
    Ok(boards)
}

/// Every algorithm on every board below `root`.
pub fn specs_for_dir(root: &Path, show_sets: bool) -> Result<Vec<RunSpec>> {
    Ok(find_boards(root)?
        .into_iter()
        .flat_map(|board| {
            Algorithm::ALL
                .into_iter()
                .map(move |algorithm| RunSpec::new(algorithm, board.clone(), show_sets))
        })
        .collect())
}

fn board_name(board: &Path) -> String {
    board
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| board.display().to_string())
}

fn solve(
    grid: &TerrainGrid,
    algorithm: Algorithm,
    relaxation: Relaxation,
    settings: &Settings,
) -> terrain_pathfinding::Result<SearchResult> {
    match algorithm {
        Algorithm::AStar => AstarSolver {
            heuristic_factor: settings.heuristic_factor,
            relaxation,
        }
        .solve(grid),
        Algorithm::Bfs => BfsSolver::with_relaxation(relaxation).solve(grid),
        Algorithm::Dijkstra => DijkstraSolver::with_relaxation(relaxation).solve(grid),
    }
}

/// Loads the board, runs the solver and writes the header, cost and annotated board to `out`.
pub fn run_one<W: Write>(spec: &RunSpec, settings: &Settings, out: &mut W) -> Result<Cost> {
    writeln!(out, "{} - {}", spec.algorithm, board_name(&spec.board))?;
    let grid = load_grid(&spec.board, &settings.costs)?;
    let relaxation = spec.relaxation.unwrap_or(settings.relaxation);
    let result = solve(&grid, spec.algorithm, relaxation, settings)?;
    info!(
        "{} on {} expanded {} cells",
        spec.algorithm,
        spec.board.display(),
        result.visited_count()
    );
    writeln!(out, "Cost: {}", result.cost)?;
    write!(out, "{}", Overlay::new(&grid, &result, spec.show_sets))?;
    writeln!(out)?;
    Ok(result.cost)
}

/// Runs every [RunSpec] in order, logging failures and carrying on. Returns the number of
/// failed runs.
pub fn run_all<W: Write>(specs: &[RunSpec], settings: &Settings, out: &mut W) -> usize {
    let mut failures = 0;
    for spec in specs {
        if let Err(e) = run_one(spec, settings, out) {
            error!(
                "{} on {} failed: {}",
                spec.algorithm,
                spec.board.display(),
                e
            );
            failures += 1;
        }
    }
    failures
}
