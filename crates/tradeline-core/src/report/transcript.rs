//! Debug transcript of every rendered line and how it was normalized.

use std::fs;
use std::path::Path;

use crate::error::ReportError;
use crate::tradeline::{CleanLine, Diagnostic};

/// Render the transcript.
///
/// Each line is written as its number, the raw text and the clean text, tab
/// separated and debug-quoted so page breaks and column gaps stay visible.
/// Diagnostics follow in a trailing section.
pub fn render_transcript(lines: &[CleanLine], diagnostics: &[Diagnostic]) -> String {
    let mut output = String::from("line\traw\tclean\n");

    for line in lines {
        output.push_str(&format!("{}\t{:?}\t{:?}\n", line.number, line.raw, line.text));
    }

    if !diagnostics.is_empty() {
        output.push_str(&format!("\n# {} diagnostics\n", diagnostics.len()));
        for diagnostic in diagnostics {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                diagnostic.line, diagnostic.rule, diagnostic.error
            ));
        }
    }

    output
}

/// Write the transcript, replacing any existing file.
pub fn write_transcript(
    lines: &[CleanLine],
    diagnostics: &[Diagnostic],
    path: &Path,
) -> Result<(), ReportError> {
    fs::write(path, render_transcript(lines, diagnostics)).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })
}
