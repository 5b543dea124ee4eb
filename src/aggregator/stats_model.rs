//! In-memory aggregate of timing samples.
//!
//! One `DdlStats` group exists per distinct DDL operation name. Each group
//! keeps one `DmlStats` record per DML operation observed while that DDL was
//! benchmarked, in the order the DML names were first seen. That order is the
//! row order of the rendered report.

use super::numeric::{mean, median};
use crate::parser::schema::{
    DdlSummary, DmlSummary, Measurement, MeasurementRecord, SampleSummary, StatsSummary,
};
use crate::utils::config::SCHEMA_VERSION;
use log::{debug, warn};
use std::collections::HashMap;

/// The four duration series tracked per DML record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSeries {
    /// Durations of the DDL statement itself
    Ddl,
    /// DML durations observed before the DDL started
    BeforeDdl,
    /// DML durations observed while the DDL was running
    DuringDdl,
    /// DML durations observed after the DDL finished
    AfterDdl,
}

impl DurationSeries {
    pub const ALL: [DurationSeries; 4] = [
        DurationSeries::Ddl,
        DurationSeries::BeforeDdl,
        DurationSeries::DuringDdl,
        DurationSeries::AfterDdl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DurationSeries::Ddl => "ddl",
            DurationSeries::BeforeDdl => "before ddl",
            DurationSeries::DuringDdl => "during ddl",
            DurationSeries::AfterDdl => "after ddl",
        }
    }
}

/// Timing samples for one DML operation under one DDL
#[derive(Debug, Clone, PartialEq)]
pub struct DmlStats {
    pub name: String,
    num_unique_threads: Option<u64>,
    pub ddl_durations: Vec<f64>,
    pub before_ddl_durations: Vec<f64>,
    pub during_ddl_durations: Vec<f64>,
    pub after_ddl_durations: Vec<f64>,
}

impl DmlStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_unique_threads: None,
            ddl_durations: Vec::new(),
            before_ddl_durations: Vec::new(),
            during_ddl_durations: Vec::new(),
            after_ddl_durations: Vec::new(),
        }
    }

    /// Thread count reported by the most recent measurement (0 if never set)
    pub fn num_unique_threads(&self) -> u64 {
        self.num_unique_threads.unwrap_or(0)
    }

    /// Overwrite the thread count, returning the previous value if any
    pub fn set_num_unique_threads(&mut self, threads: u64) -> Option<u64> {
        self.num_unique_threads.replace(threads)
    }

    pub fn add_ddl_durations(&mut self, samples: &[f64]) {
        self.ddl_durations.extend_from_slice(samples);
    }

    pub fn add_before_ddl_durations(&mut self, samples: &[f64]) {
        self.before_ddl_durations.extend_from_slice(samples);
    }

    pub fn add_during_ddl_durations(&mut self, samples: &[f64]) {
        self.during_ddl_durations.extend_from_slice(samples);
    }

    pub fn add_after_ddl_durations(&mut self, samples: &[f64]) {
        self.after_ddl_durations.extend_from_slice(samples);
    }

    /// Number of DDL executions recorded for this DML
    pub fn ddl_count(&self) -> usize {
        self.ddl_durations.len()
    }

    pub fn samples(&self, series: DurationSeries) -> &[f64] {
        match series {
            DurationSeries::Ddl => &self.ddl_durations,
            DurationSeries::BeforeDdl => &self.before_ddl_durations,
            DurationSeries::DuringDdl => &self.during_ddl_durations,
            DurationSeries::AfterDdl => &self.after_ddl_durations,
        }
    }

    /// Count, mean and median of one series
    ///
    /// **Public** - shared by the LaTeX, JSON and text renderers
    pub fn summarize(&self, series: DurationSeries) -> SampleSummary {
        let samples = self.samples(series);
        SampleSummary {
            count: samples.len(),
            mean: mean(samples).ok(),
            median: median(samples).ok(),
        }
    }

    /// Apply one measurement record: overwrite the thread count and append
    /// every duration series.
    ///
    /// **Private** - called through `DdlStats::record`
    fn apply(&mut self, ddl_name: &str, record: &MeasurementRecord) {
        if let Some(previous) = self.set_num_unique_threads(record.num_of_threads) {
            if previous != record.num_of_threads {
                warn!(
                    "Thread count for {} / {} changed from {} to {}; keeping the latest",
                    ddl_name, self.name, previous, record.num_of_threads
                );
            }
        }

        self.add_ddl_durations(&record.ddl_durations);
        self.add_before_ddl_durations(&record.before_ddl);
        self.add_during_ddl_durations(&record.during_ddl);
        self.add_after_ddl_durations(&record.after_ddl);
    }
}

/// All DML records observed under one DDL operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DdlStats {
    pub name: String,
    dml_names: Vec<String>,
    records: HashMap<String, DmlStats>,
}

impl DdlStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dml_names: Vec::new(),
            records: HashMap::new(),
        }
    }

    /// Get the record for `dml_name`, creating it on first sight
    pub fn add_dml(&mut self, dml_name: &str) -> &mut DmlStats {
        if !self.records.contains_key(dml_name) {
            self.dml_names.push(dml_name.to_string());
        }
        self.records
            .entry(dml_name.to_string())
            .or_insert_with(|| DmlStats::new(dml_name))
    }

    /// Apply one DML record from a measurement file
    pub fn record(&mut self, dml_name: &str, record: &MeasurementRecord) {
        let ddl_name = self.name.clone();
        self.add_dml(dml_name).apply(&ddl_name, record);
    }

    /// DML names in first-seen order
    pub fn dml_names(&self) -> &[String] {
        &self.dml_names
    }

    pub fn get(&self, dml_name: &str) -> Option<&DmlStats> {
        self.records.get(dml_name)
    }

    /// Records in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &DmlStats> {
        self.dml_names
            .iter()
            .filter_map(move |name| self.records.get(name))
    }

    pub fn len(&self) -> usize {
        self.dml_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dml_names.is_empty()
    }
}

/// Top-level aggregate: DDL name to group, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsAggregate {
    ddl_names: Vec<String>,
    groups: HashMap<String, DdlStats>,
}

impl StatsAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the group for `ddl_name`, creating it on first sight
    pub fn group_mut(&mut self, ddl_name: &str) -> &mut DdlStats {
        if !self.groups.contains_key(ddl_name) {
            debug!("New DDL group: {}", ddl_name);
            self.ddl_names.push(ddl_name.to_string());
        }
        self.groups
            .entry(ddl_name.to_string())
            .or_insert_with(|| DdlStats::new(ddl_name))
    }

    /// Merge a parsed measurement file into the aggregate
    ///
    /// **Public** - main entry point used by the ingestion stage
    pub fn record_measurement(&mut self, measurement: &Measurement) {
        let group = self.group_mut(&measurement.ddl_name);
        for (dml_name, record) in &measurement.dmls {
            group.record(dml_name, record);
        }
    }

    pub fn get(&self, ddl_name: &str) -> Option<&DdlStats> {
        self.groups.get(ddl_name)
    }

    /// Groups in first-seen order
    pub fn groups(&self) -> impl Iterator<Item = &DdlStats> {
        self.ddl_names
            .iter()
            .filter_map(move |name| self.groups.get(name))
    }

    pub fn len(&self) -> usize {
        self.ddl_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ddl_names.is_empty()
    }

    /// Convert the aggregate to the JSON summary schema
    ///
    /// **Public** - used by the `--json` export
    pub fn to_summary(&self) -> StatsSummary {
        use chrono::Utc;

        let ddls = self
            .groups()
            .map(|group| DdlSummary {
                name: group.name.clone(),
                dmls: group.iter().map(dml_summary).collect(),
            })
            .collect();

        StatsSummary {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            ddls,
        }
    }
}

/// **Private** - internal conversion for `to_summary`
fn dml_summary(dml: &DmlStats) -> DmlSummary {
    DmlSummary {
        name: dml.name.clone(),
        ddl_count: dml.ddl_count(),
        num_unique_threads: dml.num_unique_threads(),
        ddl: dml.summarize(DurationSeries::Ddl),
        before_ddl: dml.summarize(DurationSeries::BeforeDdl),
        during_ddl: dml.summarize(DurationSeries::DuringDdl),
        after_ddl: dml.summarize(DurationSeries::AfterDdl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(threads: u64, ddls: &[f64]) -> MeasurementRecord {
        MeasurementRecord {
            num_of_threads: threads,
            ddl_durations: ddls.to_vec(),
            before_ddl: vec![1.0],
            during_ddl: vec![2.0, 4.0],
            after_ddl: vec![],
        }
    }

    #[test]
    fn test_add_dml_preserves_first_seen_order() {
        let mut group = DdlStats::new("ALTER_TABLE");
        group.add_dml("UPDATE");
        group.add_dml("SELECT");
        group.add_dml("UPDATE");

        assert_eq!(group.dml_names(), ["UPDATE", "SELECT"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_record_appends_and_overwrites_threads() {
        let mut group = DdlStats::new("ALTER_TABLE");
        group.record("UPDATE", &record(3, &[10.0, 20.0]));
        group.record("UPDATE", &record(5, &[30.0, 40.0]));

        let dml = group.get("UPDATE").unwrap();
        assert_eq!(dml.ddl_durations, vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(dml.during_ddl_durations, vec![2.0, 4.0, 2.0, 4.0]);
        assert_eq!(dml.num_unique_threads(), 5);
    }

    #[test]
    fn test_summarize_empty_series() {
        let mut group = DdlStats::new("ADD_COLUMN");
        group.record("INSERT", &record(1, &[5.0]));

        let summary = group.get("INSERT").unwrap().summarize(DurationSeries::AfterDdl);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_none());
        assert!(summary.median.is_none());
    }

    #[test]
    fn test_threads_default_to_zero() {
        assert_eq!(DmlStats::new("DELETE").num_unique_threads(), 0);
    }

    #[test]
    fn test_aggregate_groups_in_first_seen_order() {
        let mut aggregate = StatsAggregate::new();
        aggregate.group_mut("RENAME_COLUMN");
        aggregate.group_mut("ADD_INDEX");
        aggregate.group_mut("RENAME_COLUMN");

        let names: Vec<&str> = aggregate.groups().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["RENAME_COLUMN", "ADD_INDEX"]);
    }
}
