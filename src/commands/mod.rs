//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;

// Re-export main command functions
pub use report::{
    default_tables_path, execute_report, ingest_all, ingest_files, validate_args, IngestOutcome,
    ReportArgs,
};
