//! Core library for credit report tradeline extraction.
//!
//! This crate provides:
//! - PDF text rendering
//! - Line rules that pull tradeline fields out of rendered report text
//! - Summary (with 36-month history) and detailed record layouts
//! - Text, spreadsheet and transcript report writers

pub mod error;
pub mod models;
pub mod pdf;
pub mod report;
pub mod tradeline;

pub use error::{ExtractionError, PdfError, ReportError, Result, TradelineError};
pub use models::config::{ColumnOrder, Layout, TradelineConfig};
pub use models::{DetailedRecord, MonthlyHistory, Record, SummaryRecord};
pub use pdf::{load_document_text, PdfExtractor, PdfProcessor};
pub use report::{write_reports, write_transcript, SpreadsheetWriter};
pub use tradeline::{DetailedExtractor, Diagnostic, Extraction, Extractor, SummaryExtractor};
