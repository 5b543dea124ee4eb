//! DDL Bench Stats
//!
//! Aggregates per-run DDL/DML timing measurements produced by a
//! schema-change benchmark into mean/median statistics, and appends
//! them to a LaTeX document as one table per DDL operation.
//!
//! This crate provides the core implementation for the
//! `ddl-bench-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! ddl-bench-stats --input-dir runs/ --output statistics/dblocking.tex
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
