//! Measurement parsing and schema definitions.
//!
//! This module handles:
//! - Discovering measurement files in a directory
//! - Parsing raw JSON from the benchmark harness
//! - Defining the JSON summary output schema

pub mod measurement;
pub mod schema;

// Re-export main types
pub use measurement::{
    list_measurement_files, parse_measurement, parse_measurement_file, read_measurement_file,
    FileStatus,
};
pub use schema::{Measurement, MeasurementRecord, SampleSummary, StatsSummary};
