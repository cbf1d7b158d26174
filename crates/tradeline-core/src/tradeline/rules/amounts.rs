//! Currency amounts in credit report text.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::markers::{marker_region, marker_value};
use super::patterns::is_placeholder;
use super::{LineRule, RuleResult, Slot};
use crate::error::ExtractionError;
use crate::tradeline::line::CleanLine;

/// Parse a US-formatted amount such as `$1,234.56`.
///
/// The currency symbol and thousands separators are stripped. Placeholders
/// (`NONE`, `N/A`, `-`) parse to `None`.
pub fn parse_currency(field: &str, value: &str) -> Result<Option<Decimal>, ExtractionError> {
    if is_placeholder(value) {
        return Ok(None);
    }

    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    Decimal::from_str(&cleaned)
        .map(Some)
        .map_err(|_| ExtractionError::Amount {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Amount taken from the segment after a marker.
pub struct AmountField<R> {
    marker: &'static str,
    stops: &'static [&'static str],
    required: bool,
    slot: Slot<R, Option<Decimal>>,
}

impl<R> AmountField<R> {
    pub fn new(
        marker: &'static str,
        stops: &'static [&'static str],
        slot: Slot<R, Option<Decimal>>,
    ) -> Self {
        Self {
            marker,
            stops,
            required: false,
            slot,
        }
    }

    /// Report a marker without a value instead of skipping it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn marker(&self) -> &'static str {
        self.marker
    }
}

impl<R> LineRule<R> for AmountField<R> {
    fn name(&self) -> &'static str {
        self.marker
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        if !line.contains(self.marker) {
            return Ok(());
        }

        let Some(value) = marker_value(line.as_str(), self.marker, self.stops, 1) else {
            if self.required {
                return Err(ExtractionError::MissingSegment {
                    marker: self.marker.to_string(),
                });
            }
            return Ok(());
        };

        if let Some(amount) = parse_currency(self.marker, &value)? {
            *(self.slot)(record) = Some(amount);
        }
        Ok(())
    }
}

/// Amount introduced by a `$` somewhere after the marker.
///
/// Lines where the marker has no `$` after it are column headers; the field
/// is left alone so other markers on the same line can still be read.
pub struct CurrencyAfterMarker<R> {
    marker: &'static str,
    stops: &'static [&'static str],
    slot: Slot<R, Option<Decimal>>,
}

impl<R> CurrencyAfterMarker<R> {
    pub fn new(
        marker: &'static str,
        stops: &'static [&'static str],
        slot: Slot<R, Option<Decimal>>,
    ) -> Self {
        Self {
            marker,
            stops,
            slot,
        }
    }
}

impl<R> LineRule<R> for CurrencyAfterMarker<R> {
    fn name(&self) -> &'static str {
        self.marker
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        let Some(region) = marker_region(line.as_str(), self.marker, self.stops) else {
            return Ok(());
        };
        let Some(dollar) = region.find('$') else {
            return Ok(());
        };

        let amount: String = region[dollar + 1..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();
        if amount.is_empty() {
            return Err(ExtractionError::MissingSegment {
                marker: self.marker.to_string(),
            });
        }

        if let Some(amount) = parse_currency(self.marker, &amount)? {
            *(self.slot)(record) = Some(amount);
        }
        Ok(())
    }
}
