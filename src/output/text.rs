//! Plain-text overview printed with `--summary`.

use super::latex::format_float;
use crate::aggregator::{DurationSeries, StatsAggregate};

/// Build a terminal summary of the aggregate
///
/// **Public** - printed to stdout by the report command
///
/// One row per DML with the DDL count, the median of every duration
/// series and the thread count. Means are only in the LaTeX and JSON
/// outputs.
pub fn generate_text_summary(aggregate: &StatsAggregate) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  DDL BENCHMARK SUMMARY ({} DDL operations)", aggregate.len()));

    if aggregate.is_empty() {
        lines.push("  No measurement data collected.".to_string());
        return lines.join("\n");
    }

    for group in aggregate.groups() {
        lines.push(String::new());
        lines.push(format!("  ┏━ {}", group.name));
        lines.push(format!(
            "  ┃ {:<24} {:>8} {:>12} {:>12} {:>12} {:>12} {:>8}",
            "DML", "DDLs", "DDL median", "DML before", "DML during", "DML after", "threads"
        ));

        for dml in group.iter() {
            let median = |series| {
                dml.summarize(series)
                    .median
                    .map(format_float)
                    .unwrap_or_else(|| "-".to_string())
            };
            lines.push(format!(
                "  ┃ {:<24} {:>8} {:>12} {:>12} {:>12} {:>12} {:>8}",
                dml.name,
                dml.ddl_count(),
                median(DurationSeries::Ddl),
                median(DurationSeries::BeforeDdl),
                median(DurationSeries::DuringDdl),
                median(DurationSeries::AfterDdl),
                dml.num_unique_threads()
            ));
        }
        lines.push("  ┗━".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::MeasurementRecord;

    #[test]
    fn test_text_summary_lists_groups() {
        let mut aggregate = StatsAggregate::new();
        aggregate.group_mut("ADD_INDEX").record(
            "INSERT",
            &MeasurementRecord {
                num_of_threads: 2,
                ddl_durations: vec![7.0],
                before_ddl: vec![],
                during_ddl: vec![9.0],
                after_ddl: vec![11.0, 13.0],
            },
        );

        let summary = generate_text_summary(&aggregate);
        assert!(summary.contains("1 DDL operations"));
        assert!(summary.contains("DML after"));
        let row = summary.lines().find(|l| l.contains("INSERT")).unwrap();
        let cells: Vec<&str> = row.trim_start_matches("  ┃").split_whitespace().collect();
        assert_eq!(cells, vec!["INSERT", "1", "7", "-", "9", "12", "2"]);
        assert!(summary.contains("ADD_INDEX"));
        assert!(summary.contains("INSERT"));
    }

    #[test]
    fn test_text_summary_empty() {
        let summary = generate_text_summary(&StatsAggregate::new());
        assert!(summary.contains("No measurement data collected."));
    }
}
