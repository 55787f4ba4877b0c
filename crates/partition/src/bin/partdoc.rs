//! Generate a partition document for a structured volume
//!
//! Given the extent of a volume, either as uniform origin/spacing/counts or a
//! `.vol` descriptor, and the number of processes a job will run on, write the
//! JSON partition document used to split meshes, point sets, and path lines
//! into matching pieces.

// standard library
use std::path::PathBuf;
use std::process::ExitCode;

// voltools modules
use voltools_partition::{
    factor, partition, read_descriptor, split_bounds, write_layout, Decomposition, Error,
    FactorTriple, GridSpec, Layout, Result,
};

// external crates
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use log::{debug, error, info};

/// Write a JSON partition document for a structured volume
///
/// The volume is assumed to have the same origin, spacing, and point count on
/// every axis unless a descriptor file is given.
#[derive(Parser, Debug)]
#[command(name = "partdoc", version, about, long_about = None)]
struct Cli {
    /// Number of partitions (optional if --factors is set)
    #[arg(allow_negative_numbers = true)]
    nparts: Option<i64>,

    /// Origin of the volume on every axis
    #[arg(short, long, default_value_t = -1.0, allow_negative_numbers = true)]
    #[arg(conflicts_with_all = ["volfile", "bounds"])]
    origin: f64,

    /// Spacing between points on every axis
    #[arg(short, long, default_value_t = 0.01, allow_negative_numbers = true)]
    #[arg(conflicts_with_all = ["volfile", "bounds"])]
    spacing: f64,

    /// Number of points on every axis
    #[arg(short, long, default_value_t = 101, allow_negative_numbers = true)]
    #[arg(conflicts_with_all = ["volfile", "bounds"])]
    counts: i64,

    /// Read origin, counts, and spacing from a .vol descriptor
    #[arg(short, long, value_name = "PATH", conflicts_with = "bounds")]
    volfile: Option<PathBuf>,

    /// Split a bounding box evenly instead of a grid
    #[arg(short, long, num_args = 6, allow_negative_numbers = true)]
    #[arg(value_names = ["XMIN", "XMAX", "YMIN", "YMAX", "ZMIN", "ZMAX"])]
    bounds: Option<Vec<f64>>,

    /// Explicit partition grid, e.g. 4,2,2
    #[arg(short, long, env = "PARTITIONING", value_name = "I,J,K")]
    factors: Option<FactorTriple>,

    /// Include face neighbours of every part
    #[arg(short, long)]
    neighbors: bool,

    /// Pretty-print the document
    #[arg(short, long)]
    pretty: bool,

    /// Write to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Verbose logging to stderr (-v is taken, repeat --verbose instead)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.nparts.is_none() && cli.factors.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the number of partitions is required unless --factors is set",
            )
            .exit();
    }

    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Build the document in full, then write it
fn run(cli: &Cli) -> Result<()> {
    let factors = resolve_factors(cli.nparts, cli.factors)?;
    info!("Partition grid: {factors}");

    let decomposition = decompose(cli, factors)?;

    let layout = match cli.neighbors {
        true => Layout::with_neighbors(&decomposition)?,
        false => Layout::new(&decomposition),
    };

    match &cli.output {
        Some(path) => {
            write_layout(&layout, path, cli.pretty)?;
            info!("Written {} parts to {path:?}", layout.len());
        }
        None => layout.write(std::io::stdout().lock(), cli.pretty)?,
    }

    Ok(())
}

/// Explicit factors win, but must agree with the count if both are given
fn resolve_factors(nparts: Option<i64>, factors: Option<FactorTriple>) -> Result<FactorTriple> {
    match (nparts, factors) {
        (Some(n), Some(f)) if f.count() != n => Err(Error::FactorMismatch {
            expected: n,
            found: f.count(),
        }),
        (_, Some(f)) => Ok(f),
        (Some(n), None) => factor(n),
        (None, None) => Err(Error::InvalidFactors(String::new())),
    }
}

/// Slice either the bounding box or the grid
fn decompose(cli: &Cli, factors: FactorTriple) -> Result<Decomposition> {
    if let Some(bounds) = &cli.bounds {
        let min = [bounds[0], bounds[2], bounds[4]];
        let max = [bounds[1], bounds[3], bounds[5]];
        return split_bounds(factors, min, max);
    }

    let grid = match &cli.volfile {
        Some(path) => read_descriptor(path)?,
        None => GridSpec::uniform(cli.origin, cli.spacing, cli.counts),
    };
    debug!("Grid: {grid}");

    partition(factors, &grid)
}

/// Warnings by default, more with each --verbose
fn init_logging(cli: &Cli) {
    let result = stderrlog::new()
        .module(module_path!())
        .module("voltools_partition")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("failed to initialise logging: {e}");
    }
}
