//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TradelineError};

/// Main configuration for the tradeline pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradelineConfig {
    /// Input/output locations.
    pub paths: PathsConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Spreadsheet layout configuration.
    pub report: ReportConfig,
}

/// Where documents are read from and reports are written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,

    /// Extension of the input document, without the dot. `txt` reads
    /// already-rendered text.
    pub input_extension: String,

    pub text_report: String,
    pub spreadsheet_report: String,
    pub log_file: String,

    /// Transcript of raw and clean lines; `None` disables it.
    pub debug_transcript: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            input_extension: "pdf".to_string(),
            text_report: "tradeline_data.txt".to_string(),
            spreadsheet_report: "tradeline_data.xlsx".to_string(),
            log_file: "tradeline.log".to_string(),
            debug_transcript: Some("debug_transcript.txt".to_string()),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to render (0 = unlimited).
    pub max_pages: u32,
}

/// Which document layout to extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Account summary plus 36-month history grid.
    #[default]
    Summary,
    /// Full detailed account block, key/value output.
    Detailed,
}

/// Direction of the month columns in history rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrder {
    /// December first.
    #[default]
    MostRecentFirst,
    /// January first.
    OldestFirst,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub layout: Layout,

    pub history_column_order: ColumnOrder,

    /// Anchor year when a document has no history rows. Falls back to the
    /// current year when unset.
    pub fallback_anchor_year: Option<i32>,
}

/// Spreadsheet column widths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub label_column_width: f64,
    pub value_column_width: f64,
    pub month_column_width: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_column_width: 25.0,
            value_column_width: 15.0,
            month_column_width: 5.0,
        }
    }
}

impl TradelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TradelineError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TradelineError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn text_report_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.text_report)
    }

    pub fn spreadsheet_report_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.spreadsheet_report)
    }

    pub fn log_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.log_file)
    }

    pub fn transcript_path(&self) -> Option<PathBuf> {
        self.paths
            .debug_transcript
            .as_ref()
            .map(|name| self.paths.output_dir.join(name))
    }
}
