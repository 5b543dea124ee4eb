//! LaTeX table output.
//!
//! Renders one `tabular` environment per DDL group and appends it to the
//! report document. Cell contents are written verbatim (no LaTeX escaping),
//! so names containing `_` or `&` must be handled by the including document.

use crate::aggregator::{DdlStats, DmlStats, DurationSeries, StatsAggregate};
use crate::utils::config::{EMPTY_STAT_CELL, FLOAT_SIGNIFICANT_DIGITS};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column headers after the leading DDL-name column
pub const TABLE_HEADERS: [&str; 10] = [
    "ddl number",
    "ddl mean duration",
    "ddl median duration",
    "dml mean duration before ddls",
    "dml median duration before ddls",
    "dml mean duration during ddls",
    "dml median duration during ddls",
    "dml mean duration after ddls",
    "dml median duration after ddls",
    "number of executed dml threads",
];

/// Render one group as a LaTeX `tabular`
///
/// **Public** - main rendering entry point
///
/// The first column (DML names) is left aligned, all statistic columns are
/// right aligned and padded to a common width. Rows follow the group's
/// first-seen DML order.
pub fn render_table(group: &DdlStats) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(group.len() + 1);

    let mut header = vec![group.name.clone()];
    header.extend(TABLE_HEADERS.iter().map(|h| h.to_string()));
    rows.push(header);
    rows.extend(group.iter().map(table_row));

    let columns = TABLE_HEADERS.len() + 1;
    let widths: Vec<usize> = (0..columns)
        .map(|col| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
        .collect();

    let format_row = |row: &[String]| -> String {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if col == 0 {
                    format!("{:<width$}", cell, width = widths[col])
                } else {
                    format!("{:>width$}", cell, width = widths[col])
                }
            })
            .collect();
        format!(" {} \\\\", cells.join(" & "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(format!("\\begin{{tabular}}{{l{}}}", "r".repeat(columns - 1)));
    lines.push("\\hline".to_string());
    lines.push(format_row(rows[0].as_slice()));
    lines.push("\\hline".to_string());
    for row in &rows[1..] {
        lines.push(format_row(row.as_slice()));
    }
    lines.push("\\hline".to_string());
    lines.push("\\end{tabular}".to_string());

    lines.join("\n")
}

/// Render every group, one table per group, each terminated by a newline
///
/// **Public** - returns an empty string for an empty aggregate
pub fn render_tables(aggregate: &StatsAggregate) -> String {
    aggregate
        .groups()
        .map(|group| {
            debug!("Rendering table for {} ({} DML rows)", group.name, group.len());
            format!("{}\n", render_table(group))
        })
        .collect()
}

/// Append every group's table to the report document
///
/// **Public** - main entry point for LaTeX output
///
/// The file is opened in append mode, so tables accumulate across runs.
/// An empty aggregate leaves the file system untouched.
///
/// # Returns
/// Number of tables written
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn append_tables(
    aggregate: &StatsAggregate,
    output_path: impl AsRef<Path>,
) -> Result<usize, OutputError> {
    let output_path = output_path.as_ref();

    if aggregate.is_empty() {
        info!("No DDL groups collected, nothing appended to {}", output_path.display());
        return Ok(0);
    }

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    info!("Appending {} tables to: {}", aggregate.len(), output_path.display());

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_tables(aggregate).as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(aggregate.len())
}

/// Format a float the way `printf("%g")` does with six significant digits
///
/// **Public** - shared by the text summary
///
/// `25.0` becomes `25`, `0.000012345` becomes `1.2345e-05`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = FLOAT_SIGNIFICANT_DIGITS;
    // Rounded scientific form gives the decimal exponent after rounding
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// **Private** - drop trailing zeros (and a dangling point) after the decimal point
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// **Private** - one data row for a DML record
fn table_row(dml: &DmlStats) -> Vec<String> {
    let mut row = vec![dml.name.clone(), dml.ddl_count().to_string()];
    for series in DurationSeries::ALL {
        let summary = dml.summarize(series);
        row.push(stat_cell(summary.mean));
        row.push(stat_cell(summary.median));
    }
    row.push(dml.num_unique_threads().to_string());
    row
}

/// **Private** - statistic over zero samples renders as `nan`
fn stat_cell(value: Option<f64>) -> String {
    value.map(format_float).unwrap_or_else(|| EMPTY_STAT_CELL.to_string())
}
