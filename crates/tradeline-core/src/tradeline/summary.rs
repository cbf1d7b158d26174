//! Summary layout: account summary lines plus the payment history grid.

use chrono::Datelike;
use tracing::{debug, info};

use super::line::CleanLine;
use super::rules::{
    anchor_year, AmountField, BankName, HistoryRows, LineRule, MarkerPair, TextField,
};
use super::scan::{scan, Extraction};
use super::Extractor;
use crate::models::config::{ColumnOrder, ExtractionConfig};
use crate::models::summary::SummaryRecord;

/// Markers of the summary layout.
pub const SUMMARY_MARKERS: &[&str] = &[
    "Account Number",
    "Reported Balance",
    "Account Status",
    "Available Credit",
];

/// Extractor for the summary tradeline layout.
pub struct SummaryExtractor {
    column_order: ColumnOrder,
    fallback_anchor_year: Option<i32>,
}

impl SummaryExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            column_order: ColumnOrder::default(),
            fallback_anchor_year: None,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_column_order(config.history_column_order)
            .with_fallback_anchor_year(config.fallback_anchor_year)
    }

    /// Set the direction of history month columns.
    pub fn with_column_order(mut self, order: ColumnOrder) -> Self {
        self.column_order = order;
        self
    }

    /// Set the anchor year used when no history row is present.
    pub fn with_fallback_anchor_year(mut self, year: Option<i32>) -> Self {
        self.fallback_anchor_year = year;
        self
    }

    fn fallback_anchor(&self) -> i32 {
        self.fallback_anchor_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    fn rules(&self, anchor: i32) -> Vec<Box<dyn LineRule<SummaryRecord>>> {
        vec![
            Box::new(BankName::new(|r: &mut SummaryRecord| &mut r.account_name)),
            Box::new(MarkerPair::new(
                TextField::new("Account Number", SUMMARY_MARKERS, |r: &mut SummaryRecord| {
                    &mut r.account_number
                })
                .with_width(2),
                AmountField::new("Reported Balance", SUMMARY_MARKERS, |r: &mut SummaryRecord| {
                    &mut r.reported_balance
                }),
            )),
            Box::new(MarkerPair::new(
                TextField::new("Account Status", SUMMARY_MARKERS, |r: &mut SummaryRecord| {
                    &mut r.account_status
                })
                .to_next_marker(),
                AmountField::new("Available Credit", SUMMARY_MARKERS, |r: &mut SummaryRecord| {
                    &mut r.available_credit
                }),
            )),
            Box::new(HistoryRows::new(anchor, self.column_order)),
        ]
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for SummaryExtractor {
    type Record = SummaryRecord;

    fn extract(&self, text: &str) -> Extraction<SummaryRecord> {
        let lines = CleanLine::split(text);
        info!("Extracting summary tradeline from {} lines", lines.len());

        let anchor = match anchor_year(&lines) {
            Some(year) => year,
            None => {
                let year = self.fallback_anchor();
                debug!("No history rows, anchoring history at {}", year);
                year
            }
        };

        let mut record = SummaryRecord::new(anchor);
        let mut rules = self.rules(anchor);
        let diagnostics = scan(&lines, &mut record, &mut rules);

        debug!(
            "Summary for {} with {} diagnostics, history anchored at {}",
            record.account_number,
            diagnostics.len(),
            anchor
        );

        Extraction {
            record,
            transcript: lines,
            diagnostics,
        }
    }
}
