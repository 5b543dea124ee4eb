//! Measurement file discovery and parsing.
//!
//! A measurement file holds exactly one DDL entry:
//!
//! ```json
//! { "ALTER_TABLE": { "UPDATE": { "Num_of_threads_during_ddl": 3,
//!                                "ddls": [10, 20],
//!                                "DML_before_DDL": [1], "DML_during_DDL": [5],
//!                                "DML_after_DDL": [2] } } }
//! ```
//!
//! A file that vanished between listing and reading is skipped with a
//! warning. Any other problem is returned as a `ParseError`.

use super::schema::{Measurement, RawMeasurementDocument};
use crate::aggregator::StatsAggregate;
use crate::utils::config::MEASUREMENT_EXTENSION;
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Result of handing one file name to the ingestion stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File parsed and merged into the aggregate
    Parsed,
    /// File did not exist; aggregate untouched
    Missing,
}

/// List measurement file names in a directory
///
/// **Public** - discovery step of the ingestion stage
///
/// Non-recursive. Only names are returned, sorted so repeated runs ingest
/// in the same order. Names that are not valid UTF-8 are skipped with a
/// warning.
///
/// # Errors
/// * `ParseError::Io` - directory cannot be read
pub fn list_measurement_files(dir: impl AsRef<Path>) -> Result<Vec<String>, ParseError> {
    let dir = dir.as_ref();
    let io_err = |source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                if raw.to_string_lossy().ends_with(MEASUREMENT_EXTENSION) {
                    warn!(
                        "Skipping {:?} in {}: file name is not valid UTF-8",
                        raw,
                        dir.display()
                    );
                }
                continue;
            }
        };
        if name.ends_with(MEASUREMENT_EXTENSION) {
            names.push(name);
        }
    }
    names.sort();

    debug!("Found {} measurement files in {}", names.len(), dir.display());
    Ok(names)
}

/// Parse measurement JSON text
///
/// **Public** - pure parsing, no file system access
///
/// # Arguments
/// * `source` - path the text came from (used in error messages only)
/// * `content` - JSON text
///
/// # Errors
/// * `ParseError::Json` - not JSON, or a record with missing/mistyped keys
/// * `ParseError::EmptyDocument` - no DDL entry
/// * `ParseError::MultipleDdlEntries` - more than one DDL entry
/// * `ParseError::NegativeDuration` - a duration below zero
pub fn parse_measurement(source: &Path, content: &str) -> Result<Measurement, ParseError> {
    let document: RawMeasurementDocument =
        serde_json::from_str(content).map_err(|e| ParseError::Json {
            path: source.to_path_buf(),
            source: e,
        })?;

    let mut entries = document.0;
    if entries.len() > 1 {
        return Err(ParseError::MultipleDdlEntries {
            path: source.to_path_buf(),
            count: entries.len(),
        });
    }
    let (ddl_name, dmls) = entries.pop().ok_or_else(|| ParseError::EmptyDocument {
        path: source.to_path_buf(),
    })?;

    let measurement = Measurement {
        ddl_name,
        dmls: dmls.0,
    };
    validate_durations(&measurement)?;

    Ok(measurement)
}

/// Read and parse a measurement file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `ParseError::Io` - file cannot be read
/// * anything `parse_measurement` returns
pub fn read_measurement_file(path: impl AsRef<Path>) -> Result<Measurement, ParseError> {
    let path = path.as_ref();

    debug!("Reading measurement from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_measurement(path, &content)
}

/// Parse one measurement file from `dir` into the aggregate
///
/// **Public** - per-file step of the ingestion stage
///
/// # Returns
/// `FileStatus::Missing` (after logging a warning) when `dir/file_name`
/// is not an existing file; the aggregate is left untouched.
///
/// # Errors
/// Any `ParseError` from reading an existing file. Nothing is merged
/// into the aggregate in that case.
pub fn parse_measurement_file(
    aggregate: &mut StatsAggregate,
    dir: impl AsRef<Path>,
    file_name: &str,
) -> Result<FileStatus, ParseError> {
    let dir = dir.as_ref();
    let path = dir.join(file_name);

    if !path.is_file() {
        warn!(
            "Unable to locate file {} in directory {}. The statistics will be incomplete.",
            file_name,
            dir.display()
        );
        return Ok(FileStatus::Missing);
    }

    let measurement = read_measurement_file(&path)?;
    debug!(
        "{}: DDL {} with {} DML entries",
        file_name,
        measurement.ddl_name,
        measurement.dmls.len()
    );
    aggregate.record_measurement(&measurement);

    Ok(FileStatus::Parsed)
}

/// **Private** - durations are elapsed times and must not be negative
fn validate_durations(measurement: &Measurement) -> Result<(), ParseError> {
    for (dml_name, record) in &measurement.dmls {
        for (series, samples) in record.series() {
            if let Some(&value) = samples.iter().find(|v| **v < 0.0) {
                return Err(ParseError::NegativeDuration {
                    dml_name: dml_name.clone(),
                    series,
                    value,
                });
            }
        }
    }
    Ok(())
}
