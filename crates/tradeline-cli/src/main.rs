//! CLI application for credit report tradeline extraction.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{config, run};

/// Tradeline extractor - pull account fields and payment history out of a
/// credit report.
///
/// Without a subcommand, the first document in the input directory is
/// extracted and the text and spreadsheet reports are written to the output
/// directory.
#[derive(Parser)]
#[command(name = "tradeline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    run: run::RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config(args)) => {
            let subscriber = logging::subscriber(cli.verbose, None)?;
            tracing::subscriber::with_default(subscriber, || {
                config::run(args, cli.config.as_deref())
            })
        }
        None => run::run(cli.run, cli.config.as_deref(), cli.verbose),
    }
}
