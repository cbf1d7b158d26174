//! Error types for the tradeline-core library.

use thiserror::Error;

/// Main error type for the tradeline library.
#[derive(Error, Debug)]
pub enum TradelineError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Report writing error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Soft failures raised by a single extraction rule on a single line.
///
/// These never abort a scan. The extractor records them as diagnostics and
/// leaves the affected field at its previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A currency amount could not be converted.
    #[error("invalid amount for {field}: {value:?}")]
    Amount { field: String, value: String },

    /// A date did not match the report date format.
    #[error("invalid date for {field}: {value:?} ({reason})")]
    Date {
        field: String,
        value: String,
        reason: String,
    },

    /// A count was not an unsigned integer.
    #[error("invalid count for {field}: {value:?}")]
    Count { field: String, value: String },

    /// The marker was present but the segment holding its value was not.
    #[error("missing value after {marker:?}")]
    MissingSegment { marker: String },
}

/// Errors raised while writing report artifacts.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Spreadsheet writer failure.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// I/O failure writing the text report.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the tradeline library.
pub type Result<T> = std::result::Result<T, TradelineError>;
