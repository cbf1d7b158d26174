//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PAGE_BREAK, PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Page texts joined with the page-break sentinel.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract every page, up to `max_pages` (0 = all).
    ///
    /// Pages lopdf cannot decode come back empty. When no page yields text the
    /// whole-document rendering from pdf-extract is used as a single page.
    pub fn extract_all(&self, max_pages: u32) -> Result<PdfContent> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let last = if max_pages == 0 {
            page_count
        } else {
            page_count.min(max_pages)
        };

        let mut pages = Vec::with_capacity(last as usize);
        for number in 1..=last {
            let text = match self.extract_page_text(number) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to extract text from page {}: {}", number, e);
                    String::new()
                }
            };
            pages.push(PdfPage { number, text });
        }

        if pages.iter().all(|p| p.text.trim().is_empty()) {
            debug!("No per-page text, falling back to whole-document extraction");
            let text = self.extract_text()?;
            pages = vec![PdfPage { number: 1, text }];
        }

        let separator = format!("\n{}", PAGE_BREAK);
        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(&separator);

        debug!(
            "PDF text: {} of {} pages, {} chars",
            pages.len(),
            page_count,
            text.len()
        );

        Ok(PdfContent { text, pages })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// A document with one page per entry, each showing its line of text.
    fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in lines {
            let operations = if line.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn loaded(lines: &[&str]) -> PdfExtractor {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(lines)).unwrap();
        extractor
    }

    #[test]
    fn test_pages_joined_with_page_break() {
        let extractor = loaded(&["Account Number 1111", "Reported Balance 949"]);
        assert_eq!(extractor.page_count(), 2);

        let content = extractor.extract_all(0).unwrap();
        assert_eq!(content.pages.len(), 2);
        assert_eq!(content.pages[0].number, 1);
        assert_eq!(content.pages[1].number, 2);
        assert!(content.pages[0].text.contains("Account Number 1111"));
        assert!(content.pages[1].text.contains("Reported Balance 949"));

        let first = content.text.find("Account Number 1111").unwrap();
        let separator = content.text.find(&format!("\n{}", PAGE_BREAK)).unwrap();
        let second = content.text.find("Reported Balance 949").unwrap();
        assert!(first < separator && separator < second);
        assert_eq!(content.text.matches(PAGE_BREAK).count(), 1);
    }

    #[test]
    fn test_max_pages_caps_extraction() {
        let extractor = loaded(&["Account Number 1111", "Reported Balance 949"]);

        let content = extractor.extract_all(1).unwrap();
        assert_eq!(content.pages.len(), 1);
        assert!(content.text.contains("Account Number 1111"));
        assert!(!content.text.contains("Reported Balance"));
        assert!(!content.text.contains(PAGE_BREAK));
    }

    #[test]
    fn test_blank_pages_fall_back_to_whole_document() {
        let extractor = loaded(&["", ""]);

        let content = extractor.extract_all(0).unwrap();
        assert_eq!(content.pages.len(), 1);
        assert_eq!(content.pages[0].number, 1);
        assert_eq!(content.text, content.pages[0].text);
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_all(0), Err(PdfError::NoPages)));
        assert!(matches!(extractor.extract_page_text(1), Err(PdfError::Parse(_))));
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"%PDF-garbage"), Err(PdfError::Parse(_))));
    }
}
