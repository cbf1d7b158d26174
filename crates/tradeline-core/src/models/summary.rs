//! Summary tradeline: account summary plus 36-month history.

use rust_decimal::Decimal;
use serde::Serialize;

use super::history::MonthlyHistory;
use super::record::{Field, Record, NOT_AVAILABLE};

/// Summary section labels, in report order.
pub const SUMMARY_SECTION: &str = "SUMMARY";
pub const HISTORY_SECTION: &str = "ACCOUNT HISTORY";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub account_name: String,
    pub account_number: String,
    pub reported_balance: Option<Decimal>,
    pub account_status: String,
    pub available_credit: Option<Decimal>,
    pub history: MonthlyHistory,
}

impl SummaryRecord {
    /// An all-defaults record with an empty history window.
    pub fn new(anchor_year: i32) -> Self {
        Self {
            account_name: NOT_AVAILABLE.to_string(),
            account_number: NOT_AVAILABLE.to_string(),
            reported_balance: None,
            account_status: NOT_AVAILABLE.to_string(),
            available_credit: None,
            history: MonthlyHistory::new(anchor_year),
        }
    }
}

impl Record for SummaryRecord {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::section(SUMMARY_SECTION),
            Field::text("Account Name", &self.account_name),
            Field::text("Account Number", &self.account_number),
            Field::amount("Reported Balance", self.reported_balance),
            Field::text("Account Status", &self.account_status),
            Field::amount("Available Credit", self.available_credit),
            Field::section(HISTORY_SECTION),
        ]
    }

    fn history(&self) -> Option<&MonthlyHistory> {
        Some(&self.history)
    }
}
