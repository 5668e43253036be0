//! Hodge CLI
//!
//! Prints the Hodge square of a smooth hypersurface.
//!
//! # Usage
//!
//! - `hodge 2 4`: K3 surface (dimension 2, degree 4)
//! - `hodge --preset quintic-threefold`: named example
//! - `hodge 3 5 --matrix-only`: print only the square
//!
//! Exit code 1 on any error.

use std::process::ExitCode;

use clap::Parser;
use hodge_rs::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Hodge numbers of smooth hypersurfaces in projective space
#[derive(Parser)]
#[command(name = "hodge")]
#[command(version)]
#[command(about = "Compute the Hodge square of a smooth degree-d hypersurface of dimension n")]
struct Cli {
    /// Dimension n of the hypersurface
    #[arg(conflicts_with = "preset", requires = "degree")]
    dimension: Option<usize>,

    /// Degree d of the hypersurface
    #[arg(conflicts_with = "preset")]
    degree: Option<usize>,

    /// Named example: plane-quartic, cubic-surface, k3, quintic-threefold
    #[arg(short, long)]
    preset: Option<String>,

    /// Print only the Hodge square
    #[arg(short, long)]
    matrix_only: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<HodgeReport, HodgeError> {
    let mut builder = Hypersurface::new();
    if let Some(name) = &cli.preset {
        builder = builder.preset(name.parse::<Preset>()?);
    }
    if let Some(dimension) = cli.dimension {
        builder = builder.dimension(dimension);
    }
    if let Some(degree) = cli.degree {
        builder = builder.degree(degree);
    }
    builder.build()?.compute()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(report) if cli.matrix_only => {
            println!("{}", report.square);
            ExitCode::SUCCESS
        }
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
