//! Line rules for credit report tradelines.
//!
//! Every rule inspects one clean line and writes into the record it is given.
//! Rules are independent: a line may trigger several, and a failing rule
//! reports an [`ExtractionError`] without touching the rest of the scan.

pub mod amounts;
pub mod bank;
pub mod contact;
pub mod counts;
pub mod dates;
pub mod history;
pub mod markers;
pub mod patterns;

pub use amounts::{parse_currency, AmountField, CurrencyAfterMarker};
pub use bank::BankName;
pub use contact::ContactLiteral;
pub use counts::{parse_count, CountField};
pub use dates::{parse_report_date, DateField};
pub use history::{anchor_year, year_prefix, HistoryRows};
pub use markers::{find_marker, marker_region, marker_value, BeforeMarker, MarkerPair, TextField};

use crate::error::ExtractionError;

use super::line::CleanLine;

/// Result of applying one rule to one line.
pub type RuleResult = std::result::Result<(), ExtractionError>;

/// Accessor for the record field a rule populates.
pub type Slot<R, T> = fn(&mut R) -> &mut T;

/// A detection rule applied to every clean line.
pub trait LineRule<R> {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Inspect the line and update the record.
    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult;
}
