//! The single pass that runs every rule over every line.

use serde::Serialize;
use tracing::{trace, warn};

use super::line::CleanLine;
use super::rules::LineRule;
use crate::error::ExtractionError;

/// A rule failure on one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub rule: &'static str,
    pub raw: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: ExtractionError,
}

fn serialize_error<S: serde::Serializer>(
    error: &ExtractionError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of running an extractor over one document.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction<R> {
    /// Extracted record.
    pub record: R,
    /// Every line as rendered and as normalized.
    pub transcript: Vec<CleanLine>,
    /// Soft failures, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Apply `rules` to each non-empty line in order.
///
/// Later matches overwrite earlier ones. Failures are logged and collected;
/// they never stop the scan.
pub fn scan<R>(
    lines: &[CleanLine],
    record: &mut R,
    rules: &mut [Box<dyn LineRule<R>>],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in lines.iter().filter(|l| !l.is_empty()) {
        trace!(line = line.number, "{}", line.as_str());

        for rule in rules.iter_mut() {
            if let Err(error) = rule.apply(record, line) {
                warn!(
                    line = line.number,
                    rule = rule.name(),
                    raw = %line.raw,
                    "Skipping field: {}",
                    error
                );
                diagnostics.push(Diagnostic {
                    line: line.number,
                    rule: rule.name(),
                    raw: line.raw.clone(),
                    error,
                });
            }
        }
    }

    diagnostics
}
