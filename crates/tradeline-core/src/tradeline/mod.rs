//! Tradeline field extraction module.

mod detailed;
pub mod line;
pub mod rules;
mod scan;
mod summary;

pub use detailed::DetailedExtractor;
pub use line::{CleanLine, COLUMN_GAP};
pub use scan::{scan, Diagnostic, Extraction};
pub use summary::SummaryExtractor;

use crate::models::record::Record;

/// Trait for tradeline extractors.
///
/// Extraction is best effort: it never fails, and whatever could not be read
/// is left at its default and described in [`Extraction::diagnostics`].
pub trait Extractor {
    /// The record this layout produces.
    type Record: Record;

    /// Extract a record from rendered document text.
    fn extract(&self, text: &str) -> Extraction<Self::Record>;
}
