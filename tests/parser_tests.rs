use ddl_bench_stats::aggregator::StatsAggregate;
use ddl_bench_stats::parser::{
    list_measurement_files, parse_measurement_file, read_measurement_file, FileStatus,
};
use ddl_bench_stats::utils::ParseError;
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_measurement(dir: &Path, file_name: &str, ddl: &str, dml: &str, threads: u64, ddls: &[f64]) {
    let document = json!({
        ddl: {
            dml: {
                "Num_of_threads_during_ddl": threads,
                "ddls": ddls,
                "DML_before_DDL": [1.0],
                "DML_during_DDL": [4.0, 6.0],
                "DML_after_DDL": [2.0]
            }
        }
    });
    fs::write(dir.join(file_name), document.to_string()).unwrap();
}

#[test]
fn test_list_measurement_files_filters_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_measurement(temp_dir.path(), "b.json", "ADD_COLUMN", "UPDATE", 1, &[1.0]);
    write_measurement(temp_dir.path(), "a.json", "ADD_COLUMN", "UPDATE", 1, &[1.0]);
    fs::write(temp_dir.path().join("notes.txt"), "not a measurement").unwrap();
    fs::write(temp_dir.path().join("run.json.bak"), "{}").unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    write_measurement(&temp_dir.path().join("nested"), "c.json", "ADD_COLUMN", "UPDATE", 1, &[1.0]);

    let files = list_measurement_files(temp_dir.path()).unwrap();
    assert_eq!(files, vec!["a.json".to_string(), "b.json".to_string()]);
}

#[test]
fn test_list_measurement_files_empty_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(list_measurement_files(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn test_list_measurement_files_missing_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = list_measurement_files(temp_dir.path().join("absent"));
    assert!(matches!(result, Err(ParseError::Io { .. })));
}

#[test]
fn test_read_measurement_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_measurement(temp_dir.path(), "run.json", "ALTER_TABLE", "UPDATE", 3, &[10.0, 20.0]);

    let measurement = read_measurement_file(temp_dir.path().join("run.json")).unwrap();
    assert_eq!(measurement.ddl_name, "ALTER_TABLE");
    assert_eq!(measurement.dmls.len(), 1);

    let (name, record) = &measurement.dmls[0];
    assert_eq!(name, "UPDATE");
    assert_eq!(record.num_of_threads, 3);
    assert_eq!(record.ddl_durations, vec![10.0, 20.0]);
    assert_eq!(record.during_ddl, vec![4.0, 6.0]);
}

#[test]
fn test_integer_durations_are_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("ints.json"),
        r#"{"DROP_TABLE": {"SELECT": {"Num_of_threads_during_ddl": 2, "ddls": [10, 20],
            "DML_before_DDL": [3], "DML_during_DDL": [], "DML_after_DDL": [1]}}}"#,
    )
    .unwrap();

    let measurement = read_measurement_file(temp_dir.path().join("ints.json")).unwrap();
    assert_eq!(measurement.dmls[0].1.ddl_durations, vec![10.0, 20.0]);
}

#[test]
fn test_parse_measurement_file_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut aggregate = StatsAggregate::new();

    let status = parse_measurement_file(&mut aggregate, temp_dir.path(), "gone.json").unwrap();

    assert_eq!(status, FileStatus::Missing);
    assert!(aggregate.is_empty());
}

#[test]
fn test_parse_measurement_file_merges() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_measurement(temp_dir.path(), "run.json", "ALTER_TABLE", "UPDATE", 3, &[10.0, 20.0]);
    let mut aggregate = StatsAggregate::new();

    let status = parse_measurement_file(&mut aggregate, temp_dir.path(), "run.json").unwrap();

    assert_eq!(status, FileStatus::Parsed);
    let dml = aggregate.get("ALTER_TABLE").unwrap().get("UPDATE").unwrap();
    assert_eq!(dml.ddl_durations, vec![10.0, 20.0]);
}

#[test]
fn test_parse_measurement_file_malformed_leaves_aggregate() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("bad.json"), r#"{"ALTER_TABLE": {"UPDATE": {"ddls": "x"}}}"#)
        .unwrap();
    let mut aggregate = StatsAggregate::new();

    let result = parse_measurement_file(&mut aggregate, temp_dir.path(), "bad.json");

    assert!(matches!(result, Err(ParseError::Json { .. })));
    assert!(aggregate.is_empty());
}

#[test]
fn test_parse_measurement_file_multiple_ddls() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("two.json"), r#"{"ADD_INDEX": {}, "DROP_INDEX": {}}"#).unwrap();
    let mut aggregate = StatsAggregate::new();

    let result = parse_measurement_file(&mut aggregate, temp_dir.path(), "two.json");

    assert!(matches!(result, Err(ParseError::MultipleDdlEntries { count: 2, .. })));
}
