//! Report command implementation.
//!
//! The report command:
//! 1. Lists measurement files in the input directory
//! 2. Parses each file into the aggregate
//! 3. Appends one LaTeX table per DDL operation to the report document
//! 4. Optionally writes a JSON summary and prints a text summary

use crate::aggregator::StatsAggregate;
use crate::output::{append_tables, generate_text_summary, validate_path, write_summary};
use crate::parser::{list_measurement_files, parse_measurement_file, FileStatus};
use crate::utils::config::{DEFAULT_STATS_DIR, DEFAULT_TEX_OUT_DIR, TEX_TABLES_FILE_NAME};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Directory holding the measurement files
    pub input_dir: PathBuf,

    /// LaTeX document the tables are appended to
    pub output_tex: PathBuf,

    /// Output path for the JSON summary (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_STATS_DIR),
            output_tex: default_tables_path(),
            output_json: None,
            print_summary: false,
        }
    }
}

/// Default location of the appended LaTeX tables
pub fn default_tables_path() -> PathBuf {
    Path::new(DEFAULT_TEX_OUT_DIR).join(TEX_TABLES_FILE_NAME)
}

/// Which files an ingestion pass consumed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Files merged into the aggregate
    pub parsed: Vec<String>,
    /// Files that could not be found; the report lacks their data
    pub missing: Vec<String>,
}

/// Parse the named files from `dir` into the aggregate
///
/// **Public** - per-file loop of the ingestion stage
///
/// A missing file is logged and skipped. A malformed file aborts the pass.
pub fn ingest_files(
    aggregate: &mut StatsAggregate,
    dir: &Path,
    file_names: &[String],
) -> Result<IngestOutcome> {
    let mut outcome = IngestOutcome::default();

    for file_name in file_names {
        let status = parse_measurement_file(aggregate, dir, file_name)
            .with_context(|| format!("Failed to ingest measurement file {}", file_name))?;

        match status {
            FileStatus::Parsed => outcome.parsed.push(file_name.clone()),
            FileStatus::Missing => outcome.missing.push(file_name.clone()),
        }
    }

    Ok(outcome)
}

/// List and parse every measurement file in `dir`
///
/// **Public** - ingestion stage entry point
pub fn ingest_all(aggregate: &mut StatsAggregate, dir: &Path) -> Result<IngestOutcome> {
    let file_names = list_measurement_files(dir)
        .with_context(|| format!("Failed to list measurement files in {}", dir.display()))?;

    let outcome = ingest_files(aggregate, dir, &file_names)?;

    info!(
        "Ingested {} measurement files into {} DDL groups",
        outcome.parsed.len(),
        aggregate.len()
    );
    if !outcome.missing.is_empty() {
        info!("Skipped {} missing measurement files", outcome.missing.len());
    }

    Ok(outcome)
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The aggregate the report was rendered from
///
/// # Errors
/// * Unreadable input directory
/// * Malformed measurement files
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<StatsAggregate> {
    let start_time = Instant::now();

    info!("Collecting measurements from: {}", args.input_dir.display());

    // Step 1: Ingest
    info!("Step 1/2: Parsing measurement files...");
    let mut aggregate = StatsAggregate::new();
    ingest_all(&mut aggregate, &args.input_dir)?;
    debug!("Aggregate: {:#?}", aggregate);

    // Step 2: Render
    info!("Step 2/2: Rendering report tables...");
    let tables = append_tables(&aggregate, &args.output_tex)
        .context("Failed to append LaTeX tables")?;

    if let Some(json_path) = &args.output_json {
        write_summary(&aggregate.to_summary(), json_path)
            .context("Failed to write JSON summary")?;
    }

    if args.print_summary {
        println!("\n{}\n", generate_text_summary(&aggregate));
    }

    info!(
        "Report complete: {} tables in {:.2}s",
        tables,
        start_time.elapsed().as_secs_f64()
    );

    Ok(aggregate)
}

/// Validate report arguments before running
///
/// **Public** - called before execute_report
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if !args.input_dir.is_dir() {
        bail!(
            "Measurement directory does not exist or is not a directory: {}",
            args.input_dir.display()
        );
    }

    validate_path(&args.output_tex).context("Invalid LaTeX output path")?;

    if let Some(json_path) = &args.output_json {
        validate_path(json_path).context("Invalid JSON output path")?;
    }

    Ok(())
}
