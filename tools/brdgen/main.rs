use brdgen::convert::DEFAULT_SEED;
use brdgen::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `BRD_LOG=brdgen=debug`.
const LOG_ENV: &str = "BRD_LOG";

/// Convert Excel, TSV, or CSV data to BRD format (columns as problems).
///
/// Rows and columns with an empty first cell are ignored. CSVs in the language
/// translation layout are converted row by row, with sentences split into words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Excel (.xlsx, .xls), TSV (.tsv, .txt), or CSV (.csv) file
    input: PathBuf,

    /// Output directory (default: brd_generated next to the input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for shuffling translation examples and their title options
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Write a JSON report of generated and skipped problems to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if !cli.input.exists() {
        exit_with_error(&format!(
            "Input file '{}' not found",
            cli.input.display()
        ));
    }

    let start = Instant::now();
    let mut builder = Converter::builder().with_seed(cli.seed);
    if let Some(output) = &cli.output {
        builder = builder.with_output_dir(output);
    }
    let converter = builder.build();

    let report = converter
        .convert_file(&cli.input)
        .unwrap_or_else(|e| exit_with_error(&format!("Error processing file: {}", e)));

    if let Some(report_path) = &cli.report {
        report
            .write_json(report_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write report: {}", e)));
    }

    info!(
        generated = report.generated.len(),
        skipped = report.skipped.len(),
        elapsed = ?start.elapsed(),
        "Conversion finished"
    );
}

/// `BRD_LOG` wins when set; otherwise the level follows `-v` / `-q`.
fn init_tracing(cli: &Cli) {
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    error!("{}", message);
    std::process::exit(1);
}
