//! Line normalization shared by every rule.

use regex::Captures;
use serde::Serialize;

use super::rules::markers::find_marker;
use super::rules::patterns::WHITESPACE_RUN;
use crate::pdf::PAGE_BREAK;

/// Delimiter between columns in a clean line.
pub const COLUMN_GAP: &str = "  ";

/// A rendered line and its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanLine {
    /// 1-based position in the document.
    pub number: usize,
    pub raw: String,
    pub text: String,
}

impl CleanLine {
    /// Normalize a raw line.
    ///
    /// Page breaks become spaces, the line is trimmed, runs of two or more
    /// whitespace characters collapse to [`COLUMN_GAP`] and any other single
    /// whitespace character becomes a plain space.
    pub fn new(number: usize, raw: &str) -> Self {
        let replaced = raw.replace(PAGE_BREAK, " ");
        let text = WHITESPACE_RUN
            .replace_all(replaced.trim(), |caps: &Captures| {
                if caps[0].chars().count() > 1 {
                    COLUMN_GAP
                } else {
                    " "
                }
            })
            .into_owned();

        Self {
            number,
            raw: raw.to_string(),
            text,
        }
    }

    /// Split a document into numbered clean lines.
    pub fn split(text: &str) -> Vec<Self> {
        text.lines()
            .enumerate()
            .map(|(i, raw)| Self::new(i + 1, raw))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `marker` appears as a word of its own.
    pub fn contains(&self, marker: &str) -> bool {
        find_marker(&self.text, marker).is_some()
    }

    /// The same line cut at byte offset `end`.
    pub fn truncated(&self, end: usize) -> Self {
        Self {
            number: self.number,
            raw: self.raw.clone(),
            text: self.text[..end].trim_end().to_string(),
        }
    }

    /// Column segments of the line.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.text.split(COLUMN_GAP).filter(|s| !s.is_empty())
    }
}
