//! DDL Bench Stats CLI
//!
//! Reads benchmark measurement files and appends summary tables
//! to a LaTeX report. Runs with sensible defaults when no flags are given.

use anyhow::Result;
use clap::Parser;
use ddl_bench_stats::commands::{default_tables_path, execute_report, validate_args, ReportArgs};
use ddl_bench_stats::utils::config::DEFAULT_STATS_DIR;
use env_logger::Env;
use std::path::PathBuf;

/// DDL Bench Stats - summary tables for schema-change benchmarks
#[derive(Parser, Debug)]
#[command(name = "ddl-bench-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the measurement JSON files
    #[arg(short, long, default_value = DEFAULT_STATS_DIR)]
    input_dir: PathBuf,

    /// LaTeX document the tables are appended to [default: statistics/dblocking.tex]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a JSON summary to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        input_dir: cli.input_dir,
        output_tex: cli.output.unwrap_or_else(default_tables_path),
        output_json: cli.json,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_report(args)?;

    Ok(())
}
