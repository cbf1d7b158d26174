//! Dates in credit report text.

use chrono::NaiveDate;

use super::markers::marker_value;
use super::patterns::{is_placeholder, REPORT_DATE_FORMAT};
use super::{LineRule, RuleResult, Slot};
use crate::error::ExtractionError;
use crate::tradeline::line::CleanLine;

/// Parse a report date such as `Jan 05, 2017`.
///
/// Placeholders parse to `None`.
pub fn parse_report_date(field: &str, value: &str) -> Result<Option<NaiveDate>, ExtractionError> {
    let value = value.trim();
    if is_placeholder(value) {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT)
        .map(Some)
        .map_err(|e| ExtractionError::Date {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Date taken from the first segment after a marker.
pub struct DateField<R> {
    marker: &'static str,
    stops: &'static [&'static str],
    slot: Slot<R, Option<NaiveDate>>,
}

impl<R> DateField<R> {
    pub fn new(
        marker: &'static str,
        stops: &'static [&'static str],
        slot: Slot<R, Option<NaiveDate>>,
    ) -> Self {
        Self {
            marker,
            stops,
            slot,
        }
    }
}

impl<R> LineRule<R> for DateField<R> {
    fn name(&self) -> &'static str {
        self.marker
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        let Some(value) = marker_value(line.as_str(), self.marker, self.stops, 1) else {
            return Ok(());
        };

        if let Some(date) = parse_report_date(self.marker, &value)? {
            *(self.slot)(record) = Some(date);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: &[&str] = &["Date Opened", "Date Closed"];

    #[derive(Default)]
    struct Sample {
        opened: Option<NaiveDate>,
    }

    fn rule() -> DateField<Sample> {
        DateField::new("Date Opened", STOPS, |r: &mut Sample| &mut r.opened)
    }

    #[test]
    fn test_parse_report_date() {
        assert_eq!(
            parse_report_date("d", "Jan 05, 2017").unwrap(),
            NaiveDate::from_ymd_opt(2017, 1, 5)
        );
        assert_eq!(
            parse_report_date("d", "Dec 31, 2021").unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 31)
        );
        assert_eq!(parse_report_date("d", "N/A").unwrap(), None);
    }

    #[test]
    fn test_date_field_normalizes() {
        let mut record = Sample::default();
        let line = CleanLine::new(1, "Date Opened   Jan 05, 2017   Date Closed  N/A");

        rule().apply(&mut record, &line).unwrap();
        assert_eq!(
            record.opened.unwrap().format("%Y-%m-%d").to_string(),
            "2017-01-05"
        );
    }

    #[test]
    fn test_truncated_date_keeps_default() {
        let mut record = Sample::default();
        let line = CleanLine::new(1, "Date Opened Jan 05,\u{c}");

        let err = rule().apply(&mut record, &line).unwrap_err();
        assert!(matches!(err, ExtractionError::Date { .. }));
        assert_eq!(record.opened, None);
    }
}
