//! The shared record interface seen by the report writers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::history::MonthlyHistory;

/// Default for text fields that no line populated.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonical rendering for extracted dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single value in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Section header with no value.
    Section,
    /// Free text.
    Text(String),
    /// Currency amount.
    Amount(Option<Decimal>),
    /// Calendar date.
    Date(Option<NaiveDate>),
    /// Integer count.
    Count(Option<u32>),
}

impl FieldValue {
    /// Whether the value is missing. Sections and text are never null.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            FieldValue::Amount(None) | FieldValue::Date(None) | FieldValue::Count(None)
        )
    }

    /// Display string used by the text report. Nulls render empty.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Section => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Amount(a) => a.map(|a| a.normalize().to_string()).unwrap_or_default(),
            FieldValue::Date(d) => d
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            FieldValue::Count(c) => c.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

/// A labelled value in declared report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn section(label: &'static str) -> Self {
        Self {
            label,
            value: FieldValue::Section,
        }
    }

    pub fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn amount(label: &'static str, value: Option<Decimal>) -> Self {
        Self {
            label,
            value: FieldValue::Amount(value),
        }
    }

    pub fn date(label: &'static str, value: Option<NaiveDate>) -> Self {
        Self {
            label,
            value: FieldValue::Date(value),
        }
    }

    pub fn count(label: &'static str, value: Option<u32>) -> Self {
        Self {
            label,
            value: FieldValue::Count(value),
        }
    }
}

/// A tradeline record that can be serialized into reports.
pub trait Record {
    /// Fields in the fixed order they are reported.
    fn fields(&self) -> Vec<Field>;

    /// The monthly history, for layouts that carry one.
    fn history(&self) -> Option<&MonthlyHistory> {
        None
    }
}
