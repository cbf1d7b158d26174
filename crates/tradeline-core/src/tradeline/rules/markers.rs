//! Marker lookup and text-valued marker rules.

use super::amounts::AmountField;
use super::{LineRule, RuleResult, Slot};
use crate::tradeline::line::{CleanLine, COLUMN_GAP};

/// Byte offset of the first occurrence of `marker` that stands as its own
/// word.
///
/// The marker may not follow a letter or digit, nor run into a letter. A
/// trailing digit is allowed so glued values such as `Number1234` still match.
pub fn find_marker(line: &str, marker: &str) -> Option<usize> {
    line.match_indices(marker)
        .map(|(start, _)| start)
        .find(|&start| {
            let before = line[..start].chars().next_back();
            let after = line[start + marker.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphabetic)
        })
}

/// Text following `marker`, up to the next known marker on the line.
///
/// Leading colons and whitespace are dropped. Returns `None` when the marker
/// is absent.
pub fn marker_region<'a>(line: &'a str, marker: &str, stops: &[&str]) -> Option<&'a str> {
    let start = find_marker(line, marker)? + marker.len();
    let rest = &line[start..];

    let end = stops
        .iter()
        .filter(|stop| **stop != marker)
        .filter_map(|stop| find_marker(rest, stop))
        .min()
        .unwrap_or(rest.len());

    Some(
        rest[..end]
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim_end(),
    )
}

/// The first `width` segments after `marker`, joined with a space.
pub fn marker_value(line: &str, marker: &str, stops: &[&str], width: usize) -> Option<String> {
    let region = marker_region(line, marker, stops)?;
    let segments: Vec<&str> = region
        .split(COLUMN_GAP)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(width)
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(" "))
    }
}

/// Free-text field taken from the segments after a marker.
///
/// A marker with nothing after it is a label-only line and leaves the field
/// untouched.
pub struct TextField<R> {
    marker: &'static str,
    stops: &'static [&'static str],
    width: usize,
    slot: Slot<R, String>,
}

impl<R> TextField<R> {
    pub fn new(marker: &'static str, stops: &'static [&'static str], slot: Slot<R, String>) -> Self {
        Self {
            marker,
            stops,
            width: 1,
            slot,
        }
    }

    /// Number of segments to take.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Take everything up to the next marker.
    pub fn to_next_marker(self) -> Self {
        self.with_width(usize::MAX)
    }

    /// Take the rest of the line, other markers included.
    pub fn to_end_of_line(mut self) -> Self {
        self.stops = &[];
        self.to_next_marker()
    }

    pub fn marker(&self) -> &'static str {
        self.marker
    }
}

impl<R> LineRule<R> for TextField<R> {
    fn name(&self) -> &'static str {
        self.marker
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        if let Some(value) = marker_value(line.as_str(), self.marker, self.stops, self.width) {
            *(self.slot)(record) = value;
        }
        Ok(())
    }
}

/// Two markers on one line: a text identifier and an amount.
///
/// Fires only when both markers are present. The amount side is required, so
/// a missing or malformed amount is reported.
pub struct MarkerPair<R> {
    text: TextField<R>,
    amount: AmountField<R>,
}

impl<R> MarkerPair<R> {
    pub fn new(text: TextField<R>, amount: AmountField<R>) -> Self {
        Self {
            text,
            amount: amount.required(),
        }
    }
}

impl<R> LineRule<R> for MarkerPair<R> {
    fn name(&self) -> &'static str {
        self.amount.marker()
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        if !(line.contains(self.text.marker()) && line.contains(self.amount.marker())) {
            return Ok(());
        }
        self.text.apply(record, line)?;
        self.amount.apply(record, line)
    }
}

/// Runs `rule` on the part of the line before `barrier` only.
///
/// Used to keep free text that follows a trailing marker, such as remarks,
/// away from every other rule.
pub struct BeforeMarker<R> {
    barrier: &'static str,
    rule: Box<dyn LineRule<R>>,
}

impl<R> BeforeMarker<R> {
    pub fn new(barrier: &'static str, rule: Box<dyn LineRule<R>>) -> Self {
        Self { barrier, rule }
    }
}

impl<R> LineRule<R> for BeforeMarker<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        match find_marker(line.as_str(), self.barrier) {
            Some(end) => self.rule.apply(record, &line.truncated(end)),
            None => self.rule.apply(record, line),
        }
    }
}
