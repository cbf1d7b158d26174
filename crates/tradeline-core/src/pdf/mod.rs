//! PDF processing module.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage};

use std::path::Path;

use tracing::{info, warn};

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Separator placed between rendered pages.
pub const PAGE_BREAK: char = '\u{c}';

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Render a document on disk to plain text.
///
/// Files with a `txt` extension are taken as already rendered. Anything else
/// is loaded as a PDF and its pages are joined with [`PAGE_BREAK`].
pub fn load_document_text(path: &Path, config: &PdfConfig) -> crate::Result<String> {
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    if is_text {
        info!("Reading pre-rendered text from {}", path.display());
        return Ok(std::fs::read_to_string(path)?);
    }

    info!("Rendering PDF {}", path.display());
    let data = std::fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    let content = extractor.extract_all(config.max_pages)?;

    let blank = content
        .pages
        .iter()
        .filter(|page| page.text.trim().is_empty())
        .map(|page| page.number)
        .collect::<Vec<_>>();
    if !blank.is_empty() {
        warn!("No text on pages {:?} of {}", blank, content.pages.len());
    }
    info!("Rendered {} pages", content.pages.len());
    Ok(content.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "Account Number 1234\n").unwrap();

        let text = load_document_text(&path, &PdfConfig::default()).unwrap();
        assert_eq!(text, "Account Number 1234\n");
    }

    #[test]
    fn test_load_invalid_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        let err = load_document_text(&path, &PdfConfig::default()).unwrap_err();
        assert!(matches!(err, crate::TradelineError::Pdf(PdfError::Parse(_))));
    }
}
