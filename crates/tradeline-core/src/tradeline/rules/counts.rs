//! Integer counters (months reviewed, times late).

use super::markers::marker_value;
use super::patterns::{is_placeholder, COUNT};
use super::{LineRule, RuleResult, Slot};
use crate::error::ExtractionError;
use crate::tradeline::line::CleanLine;

/// Parse an unsigned counter. Placeholders parse to `None`.
pub fn parse_count(field: &str, value: &str) -> Result<Option<u32>, ExtractionError> {
    let value = value.trim();
    if is_placeholder(value) {
        return Ok(None);
    }

    let invalid = || ExtractionError::Count {
        field: field.to_string(),
        value: value.to_string(),
    };

    if !COUNT.is_match(value) {
        return Err(invalid());
    }
    value.parse().map(Some).map_err(|_| invalid())
}

/// Counter taken from the first segment after a marker.
pub struct CountField<R> {
    marker: &'static str,
    stops: &'static [&'static str],
    slot: Slot<R, Option<u32>>,
}

impl<R> CountField<R> {
    pub fn new(marker: &'static str, stops: &'static [&'static str], slot: Slot<R, Option<u32>>) -> Self {
        Self {
            marker,
            stops,
            slot,
        }
    }
}

impl<R> LineRule<R> for CountField<R> {
    fn name(&self) -> &'static str {
        self.marker
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        let Some(value) = marker_value(line.as_str(), self.marker, self.stops, 1) else {
            return Ok(());
        };

        if let Some(count) = parse_count(self.marker, &value)? {
            *(self.slot)(record) = Some(count);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("c", "48").unwrap(), Some(48));
        assert_eq!(parse_count("c", "-").unwrap(), None);
        assert!(parse_count("c", "4x").is_err());
        assert!(parse_count("c", "99999999999").is_err());
    }

    #[test]
    fn test_count_field() {
        const STOPS: &[&str] = &["30 Days Late", "60 Days Late"];
        let mut late: Option<u32> = None;
        let mut rule = CountField::new("30 Days Late", STOPS, |r: &mut Option<u32>| r);

        let line = CleanLine::new(1, "30 Days Late  2   60 Days Late  0");
        rule.apply(&mut late, &line).unwrap();
        assert_eq!(late, Some(2));
    }
}
