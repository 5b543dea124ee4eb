//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default directory scanned for measurement files
pub const DEFAULT_STATS_DIR: &str = ".";

/// Default directory the LaTeX tables are appended into
pub const DEFAULT_TEX_OUT_DIR: &str = "statistics";

/// Default file name of the appended LaTeX tables
pub const TEX_TABLES_FILE_NAME: &str = "dblocking.tex";

/// Extension a file must carry to be picked up as a measurement file
pub const MEASUREMENT_EXTENSION: &str = ".json";

// Duration series keys written by the benchmark harness
pub const DDLS: &str = "ddls";
pub const DMLS_BEFORE_DDL: &str = "DML_before_DDL";
pub const DMLS_DURING_DDL: &str = "DML_during_DDL";
pub const DMLS_AFTER_DDL: &str = "DML_after_DDL";

/// Significant digits used when rendering floats into table cells
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 6;

/// Cell text for a statistic over zero samples
pub const EMPTY_STAT_CELL: &str = "nan";
