use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use terrain_pathfinding::{Algorithm, Relaxation};
use terrain_pathfinding_driver::{
    load_cost_table, load_manifest, run_all, specs_for_dir, DriverError, RunSpec, Settings,
};

const DEFAULT_MANIFEST: &str = "boards/runs.csv";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// CSV file with `symbol,cost` rows replacing the built-in terrain costs
    #[clap(long, global = true)]
    costs: Option<PathBuf>,

    /// Only relax a cell when the new route to it is strictly cheaper
    #[clap(long, global = true)]
    optimal: bool,

    /// Multiplier applied to the A* Manhattan heuristic
    #[clap(long, global = true, default_value_t = 1.0)]
    heuristic_factor: f32,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one algorithm on one board
    Run {
        /// a*, bfs or dijkstra
        algorithm: Algorithm,
        board: PathBuf,
        /// Mark visited cells with 'x' and frontier cells with '*'
        #[clap(long)]
        show_sets: bool,
    },
    /// Run every row of a manifest CSV (`algorithm,board,show_sets`)
    Batch { manifest: PathBuf },
    /// Run every algorithm on every .txt board below a directory
    All {
        dir: PathBuf,
        #[clap(long)]
        show_sets: bool,
    },
}

fn specs(command: Option<Command>) -> Result<Vec<RunSpec>, DriverError> {
    match command {
        Some(Command::Run {
            algorithm,
            board,
            show_sets,
        }) => Ok(vec![RunSpec::new(algorithm, board, show_sets)]),
        Some(Command::Batch { manifest }) => load_manifest(&manifest),
        Some(Command::All { dir, show_sets }) => specs_for_dir(&dir, show_sets),
        None => load_manifest(Path::new(DEFAULT_MANIFEST)),
    }
}

fn settings(args: &Args) -> Result<Settings, DriverError> {
    let mut settings = Settings {
        heuristic_factor: args.heuristic_factor,
        ..Settings::default()
    };
    if let Some(path) = &args.costs {
        settings.costs = load_cost_table(path)?;
    }
    if args.optimal {
        settings.relaxation = Relaxation::Improving;
    }
    Ok(settings)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut args = Args::parse();

    let settings = match settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let specs = match specs(args.command.take()) {
        Ok(specs) => specs,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("running {} searches", specs.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failures = run_all(&specs, &settings, &mut out);
    if out.flush().is_err() || failures > 0 {
        if failures > 0 {
            error!("{} of {} runs failed", failures, specs.len());
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
