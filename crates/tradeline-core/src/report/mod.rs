//! Report writers for extracted tradelines.
//!
//! Writers only see the [`Record`] interface, so both layouts share them.

pub mod spreadsheet;
pub mod text;
pub mod transcript;

pub use spreadsheet::SpreadsheetWriter;
pub use text::{parse_text_report, render_text_report, write_text_report};
pub use transcript::{render_transcript, write_transcript};

use tracing::info;

use crate::error::Result;
use crate::models::config::TradelineConfig;
use crate::models::record::Record;

/// Write the text report and the spreadsheet to the configured output paths.
pub fn write_reports<R: Record>(record: &R, config: &TradelineConfig) -> Result<()> {
    let text_path = config.text_report_path();
    write_text_report(record, &text_path)?;
    info!("Text report written to {}", text_path.display());

    let sheet_path = config.spreadsheet_report_path();
    SpreadsheetWriter::new(&config.report).write(record, &sheet_path)?;
    info!("Spreadsheet written to {}", sheet_path.display());

    Ok(())
}
