//! Default command - extract the tradeline from the first input document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use tradeline_core::models::config::PathsConfig;
use tradeline_core::{
    load_document_text, write_reports, write_transcript, DetailedExtractor, Extractor, Layout,
    Record, SummaryExtractor, TradelineConfig,
};

use super::config::{load_config, resolve_config_path};
use crate::logging;

/// Arguments for the default run.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Directory searched for the input document
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory reports are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Report layout to extract
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LayoutArg {
    /// Account summary with 36-month history
    Summary,
    /// Detailed account block
    Detailed,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Summary => Layout::Summary,
            LayoutArg::Detailed => Layout::Detailed,
        }
    }
}

impl RunArgs {
    fn apply(&self, config: &mut TradelineConfig) {
        if let Some(dir) = &self.input_dir {
            config.paths.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir = dir.clone();
        }
        if let Some(layout) = self.layout {
            config.extraction.layout = layout.into();
        }
    }
}

/// What a run produced.
struct RunReport {
    input: PathBuf,
    fields: usize,
    diagnostics: usize,
}

pub fn run(args: RunArgs, config_path: Option<&Path>, verbose: u8) -> anyhow::Result<()> {
    let source = resolve_config_path(config_path);
    let mut config = load_config(config_path)?;
    args.apply(&mut config);

    setup_directories(&config.paths)?;

    // The log file lives in the configured output directory
    let subscriber = logging::subscriber(verbose, Some(config.log_path()))?;
    tracing::subscriber::with_default(subscriber, || {
        match &source {
            Some(path) => info!("Using configuration from {}", path.display()),
            None => info!("No configuration file found, using defaults"),
        }
        execute(&config)
    })
}

fn setup_directories(paths: &PathsConfig) -> anyhow::Result<()> {
    for (name, dir) in [("input", &paths.input_dir), ("output", &paths.output_dir)] {
        if dir.exists() {
            println!("{} {} directory exists at {}", style("ℹ").blue(), name, dir.display());
        } else {
            fs::create_dir_all(dir)?;
            println!("{} Created {} directory at {}", style("✓").green(), name, dir.display());
        }
    }
    Ok(())
}

/// First document in the input directory with the configured extension, in
/// lexicographic order.
pub fn find_input(paths: &PathsConfig) -> anyhow::Result<PathBuf> {
    let dir = glob::Pattern::escape(&paths.input_dir.to_string_lossy());
    let pattern = format!("{}/*.{}", dir, paths.input_extension);
    debug!("Looking for input with pattern {}", pattern);

    let mut matches: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    matches.sort();

    match matches.into_iter().next() {
        Some(path) => Ok(path),
        None => anyhow::bail!(
            "No .{} file found in {}",
            paths.input_extension,
            paths.input_dir.display()
        ),
    }
}

fn execute(config: &TradelineConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let input = find_input(&config.paths)?;
    info!("Processing file: {}", input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading document...");
    let text = load_document_text(&input, &config.pdf)?;
    if text.trim().is_empty() {
        warn!("No text could be extracted from {}", input.display());
    }

    pb.set_message("Extracting tradeline...");
    let report = match config.extraction.layout {
        Layout::Summary => extract_and_write(
            &SummaryExtractor::from_config(&config.extraction),
            &input,
            &text,
            config,
            &pb,
        )?,
        Layout::Detailed => {
            extract_and_write(&DetailedExtractor::new(), &input, &text, config, &pb)?
        }
    };

    pb.finish_and_clear();

    println!(
        "{} Extracted {} fields from {}",
        style("✓").green(),
        report.fields,
        report.input.display()
    );
    println!("  Text report: {}", config.text_report_path().display());
    println!("  Spreadsheet: {}", config.spreadsheet_report_path().display());
    if let Some(path) = config.transcript_path() {
        println!("  Transcript:  {}", path.display());
    }
    if report.diagnostics > 0 {
        println!(
            "{} {} fields could not be parsed, see {}",
            style("!").yellow(),
            report.diagnostics,
            config.log_path().display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

fn extract_and_write<E: Extractor>(
    extractor: &E,
    input: &Path,
    text: &str,
    config: &TradelineConfig,
    pb: &ProgressBar,
) -> anyhow::Result<RunReport> {
    let extraction = extractor.extract(text);

    pb.set_message("Writing reports...");
    write_reports(&extraction.record, config)?;

    if let Some(path) = config.transcript_path() {
        write_transcript(&extraction.transcript, &extraction.diagnostics, &path)?;
        debug!("Transcript written to {}", path.display());
    }

    Ok(RunReport {
        input: input.to_path_buf(),
        fields: extraction.record.fields().len(),
        diagnostics: extraction.diagnostics.len(),
    })
}
