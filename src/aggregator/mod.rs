//! Aggregation of measurement files into per-DDL statistics.
//!
//! This module provides:
//! - The in-memory aggregate model (DDL groups holding DML records)
//! - Mean and median over duration samples

pub mod numeric;
pub mod stats_model;

// Re-export main types and functions
pub use numeric::{mean, median};
pub use stats_model::{DdlStats, DmlStats, DurationSeries, StatsAggregate};
