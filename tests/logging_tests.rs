//! Warnings emitted during ingestion.
//!
//! Kept in its own test binary because it installs the process-wide logger.

use ddl_bench_stats::aggregator::StatsAggregate;
use ddl_bench_stats::commands::ingest_all;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::fs;
use std::sync::Mutex;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn write_measurement(dir: &std::path::Path, file_name: &str, ddls: &[f64]) {
    let document = json!({
        "ALTER_TABLE": {
            "UPDATE": {
                "Num_of_threads_during_ddl": 3,
                "ddls": ddls,
                "DML_before_DDL": [1.0],
                "DML_during_DDL": [2.0],
                "DML_after_DDL": [3.0]
            }
        }
    });
    fs::write(dir.join(file_name), document.to_string()).unwrap();
}

#[test]
fn test_missing_file_logs_exactly_one_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let temp_dir = tempfile::tempdir().unwrap();
    write_measurement(temp_dir.path(), "a.json", &[10.0, 20.0]);
    write_measurement(temp_dir.path(), "c.json", &[30.0, 40.0]);
    // Listed as a measurement file, but not a regular file
    fs::create_dir(temp_dir.path().join("b.json")).unwrap();

    let mut aggregate = StatsAggregate::new();
    let outcome = ingest_all(&mut aggregate, temp_dir.path()).unwrap();

    assert_eq!(outcome.parsed, vec!["a.json".to_string(), "c.json".to_string()]);
    assert_eq!(outcome.missing, vec!["b.json".to_string()]);
    let dml = aggregate.get("ALTER_TABLE").unwrap().get("UPDATE").unwrap();
    assert_eq!(dml.ddl_durations, vec![10.0, 20.0, 30.0, 40.0]);

    let records = LOGGER.records.lock().unwrap();
    let warnings: Vec<&String> = records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(warnings.len(), 1, "warnings: {:?}", warnings);
    assert!(warnings[0].contains("b.json"));
    assert!(warnings[0].contains(&temp_dir.path().display().to_string()));
}
