//! Payment history grid rows.
//!
//! A history row starts with a four-digit year followed by up to twelve
//! month cells. Cells are positional: `-` means no data but still consumes a
//! month. Rows are placed into the 36-month window anchored at the largest
//! year in the document.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, trace};

use super::patterns::HISTORY_VALUE;
use super::{LineRule, RuleResult};
use crate::error::ExtractionError;
use crate::models::config::ColumnOrder;
use crate::models::history::{HistoryMetric, HISTORY_MONTHS};
use crate::models::summary::SummaryRecord;
use crate::tradeline::line::CleanLine;

/// Year at the start of a history row.
pub fn year_prefix(line: &str) -> Option<i32> {
    let prefix = line.get(..4)?;
    if prefix.bytes().all(|b| b.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

/// Largest history-row year in the document.
pub fn anchor_year(lines: &[CleanLine]) -> Option<i32> {
    lines.iter().filter_map(|l| year_prefix(l.as_str())).max()
}

/// Ordinal of a cell, or `None` when it falls outside the window.
pub fn month_id(anchor: i32, year: i32, position: usize, order: ColumnOrder) -> Option<u32> {
    let offset = match order {
        ColumnOrder::MostRecentFirst => position as i64,
        ColumnOrder::OldestFirst => 11 - position as i64,
    };
    let months_from_recent = (anchor as i64 - year as i64) * 12 + offset;
    let id = HISTORY_MONTHS as i64 - months_from_recent;

    if (1..=HISTORY_MONTHS as i64).contains(&id) {
        Some(id as u32)
    } else {
        None
    }
}

/// Fills the summary history from year rows.
///
/// A line holding only a metric heading (e.g. `Actual Payment`) switches the
/// metric that following rows populate.
pub struct HistoryRows {
    anchor: i32,
    order: ColumnOrder,
    metric: HistoryMetric,
}

impl HistoryRows {
    pub fn new(anchor: i32, order: ColumnOrder) -> Self {
        Self {
            anchor,
            order,
            metric: HistoryMetric::Balance,
        }
    }
}

impl LineRule<SummaryRecord> for HistoryRows {
    fn name(&self) -> &'static str {
        "History"
    }

    fn apply(&mut self, record: &mut SummaryRecord, line: &CleanLine) -> RuleResult {
        if let Some(metric) = HistoryMetric::from_heading(line.as_str()) {
            debug!("History rows now populate {}", metric.label());
            self.metric = metric;
            return Ok(());
        }

        let Some(year) = year_prefix(line.as_str()) else {
            return Ok(());
        };

        // The first unconvertible cell is reported once the whole row is read
        let mut first_error = None;
        for (position, cell) in line.as_str()[4..].split_whitespace().enumerate() {
            if position >= 12 {
                trace!("Ignoring extra cell {:?} in {} row", cell, year);
                break;
            }
            if !HISTORY_VALUE.is_match(cell) {
                continue;
            }

            let Some(id) = month_id(self.anchor, year, position, self.order) else {
                continue;
            };

            match Decimal::from_str(&cell.replace(',', "")) {
                Ok(value) => {
                    record.history.set(id, self.metric, value);
                }
                Err(_) => {
                    first_error.get_or_insert(ExtractionError::Amount {
                        field: self.metric.label().to_string(),
                        value: cell.to_string(),
                    });
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
