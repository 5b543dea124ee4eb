//! JSON schema definitions for measurement input and summary output.
//!
//! Measurement files are written by the benchmark harness; the summary is
//! what we write to disk with `--json`. The summary schema is versioned to
//! allow future evolution.

use crate::utils::config::{DDLS, DMLS_AFTER_DDL, DMLS_BEFORE_DDL, DMLS_DURING_DDL};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// One DML entry of a measurement file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Number of DML threads that ran while the DDL executed
    #[serde(rename = "Num_of_threads_during_ddl")]
    pub num_of_threads: u64,

    /// Durations of the DDL statement
    #[serde(rename = "ddls")]
    pub ddl_durations: Vec<f64>,

    #[serde(rename = "DML_before_DDL")]
    pub before_ddl: Vec<f64>,

    #[serde(rename = "DML_during_DDL")]
    pub during_ddl: Vec<f64>,

    #[serde(rename = "DML_after_DDL")]
    pub after_ddl: Vec<f64>,
}

impl MeasurementRecord {
    /// Each duration series paired with its JSON key
    pub fn series(&self) -> [(&'static str, &[f64]); 4] {
        [
            (DDLS, self.ddl_durations.as_slice()),
            (DMLS_BEFORE_DDL, self.before_ddl.as_slice()),
            (DMLS_DURING_DDL, self.during_ddl.as_slice()),
            (DMLS_AFTER_DDL, self.after_ddl.as_slice()),
        ]
    }
}

/// A fully parsed measurement file: one DDL and its DML entries in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub ddl_name: String,
    pub dmls: Vec<(String, MeasurementRecord)>,
}

/// JSON object decoded as key/value pairs in document order
///
/// `serde_json::Map` sorts its keys unless `preserve_order` is enabled,
/// so the visitor collects entries itself. Keys are unique: a repeated key
/// overwrites the earlier value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntries<T>(pub Vec<(String, T)>);

impl<'de, T> Deserialize<'de> for OrderedEntries<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EntriesVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = OrderedEntries<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, T)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    // Repeated key: last value wins, first position is kept
                    match entries.iter_mut().find(|(existing, _)| *existing == key) {
                        Some(slot) => slot.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Raw shape of a measurement file: DDL name -> DML name -> record
pub type RawMeasurementDocument = OrderedEntries<OrderedEntries<MeasurementRecord>>;

/// Count, mean and median of one duration series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,

    /// `None` when the series holds no samples
    pub mean: Option<f64>,

    /// `None` when the series holds no samples
    pub median: Option<f64>,
}

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the summary was generated
    pub generated_at: String,

    /// One entry per DDL operation, in first-seen order
    pub ddls: Vec<DdlSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DdlSummary {
    pub name: String,
    pub dmls: Vec<DmlSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmlSummary {
    pub name: String,
    pub ddl_count: usize,
    pub num_unique_threads: u64,
    pub ddl: SampleSummary,
    pub before_ddl: SampleSummary,
    pub during_ddl: SampleSummary,
    pub after_ddl: SampleSummary,
}
