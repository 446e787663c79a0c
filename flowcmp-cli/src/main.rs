use clap::Parser;
use flowcmp::{compare_files, CompareConfig, ErrorMap};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Angular error between two motion fields, written as an FERR report"
)]
struct Cli {
    /// Motion field used as the left operand (e.g. estimated flow).
    left: PathBuf,
    /// Motion field used as the right operand (e.g. ground truth).
    right: PathBuf,
    /// Destination of the error report.
    out: PathBuf,
    /// Classify rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Print a JSON summary of the comparison to stdout.
    #[arg(long)]
    summary: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    width: usize,
    height: usize,
    /// `null` when no pixel contributed.
    mean: Option<f32>,
    count: usize,
    angle: usize,
    left_zero: usize,
    right_zero: usize,
    both_zero: usize,
}

impl From<&ErrorMap> for Summary {
    fn from(map: &ErrorMap) -> Self {
        let tally = map.tally();
        Self {
            width: map.width(),
            height: map.height(),
            mean: map.mean(),
            count: map.count(),
            angle: tally.angle,
            left_zero: tally.left_zero,
            right_zero: tally.right_zero,
            both_zero: tally.both_zero,
        }
    }
}

fn check_exists(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File '{}' does not exist.", path.display()).into());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("flowcmp=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    check_exists(&cli.left)?;
    check_exists(&cli.right)?;

    let cfg = CompareConfig {
        parallel: cli.parallel,
    };
    let map = compare_files(&cli.left, &cli.right, &cli.out, cfg)?;
    tracing::info!(
        out = %cli.out.display(),
        count = map.count(),
        mean = map.mean_value(),
        "report written"
    );

    if cli.summary {
        let json = serde_json::to_string_pretty(&Summary::from(&map))?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
