//! Flat `Label: value` text report.

use std::fs;
use std::path::Path;

use crate::error::ReportError;
use crate::models::history::HistoryPoint;
use crate::models::record::{FieldValue, Record};

/// Label of a history line, e.g. `2022 DEC (36)`.
pub fn history_label(point: &HistoryPoint) -> String {
    format!("{} {} ({})", point.year, point.month_name, point.month_id)
}

/// Render a record as one `Label: value` line per field.
///
/// Null values and section headers render with an empty value. Records with
/// a history append one line per month carrying its balance.
pub fn render_text_report<R: Record>(record: &R) -> String {
    let mut output = String::new();

    for field in record.fields() {
        output.push_str(&format!("{}: {}\n", field.label, field.value.display()));
    }

    if let Some(history) = record.history() {
        for point in history.points() {
            let balance = FieldValue::Amount(point.balance).display();
            output.push_str(&format!("{}: {}\n", history_label(point), balance));
        }
    }

    output
}

/// Render and write the text report, replacing any existing file.
pub fn write_text_report<R: Record>(record: &R, path: &Path) -> Result<(), ReportError> {
    fs::write(path, render_text_report(record)).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Recover `(label, value)` pairs from a rendered text report.
///
/// Lines without a `:` separator are skipped.
pub fn parse_text_report(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| {
            let (label, value) = line.split_once(':')?;
            let value = value.strip_prefix(' ').unwrap_or(value);
            Some((label.to_string(), value.to_string()))
        })
        .collect()
}
