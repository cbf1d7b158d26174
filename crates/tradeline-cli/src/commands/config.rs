//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use tradeline_core::TradelineConfig;

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "tradeline.json";

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Show which configuration file is used
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Path => show_path(config_path),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradeline")
        .join("config.json")
}

/// The configuration file to use: the explicit path, else `./tradeline.json`,
/// else the user config file, if either exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    [PathBuf::from(LOCAL_CONFIG), default_config_path()]
        .into_iter()
        .find(|path| path.exists())
}

/// Load the configuration, falling back to defaults when no file is found.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<TradelineConfig> {
    match resolve_config_path(explicit) {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            debug!("Loading configuration from {}", path.display());
            Ok(TradelineConfig::from_file(&path)?)
        }
        None => Ok(TradelineConfig::default()),
    }
}

fn show_config(config_path: Option<&Path>) -> anyhow::Result<()> {
    if resolve_config_path(config_path).is_none() {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    TradelineConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn show_path(config_path: Option<&Path>) -> anyhow::Result<()> {
    match resolve_config_path(config_path) {
        Some(path) if path.exists() => {
            println!("Configuration file: {}", path.display());
            println!("Status: {}", style("exists").green());
        }
        Some(path) => {
            println!("Configuration file: {}", path.display());
            println!("Status: {}", style("not found").red());
        }
        None => {
            println!("Configuration file: {}", default_config_path().display());
            println!("Status: {}", style("not created").yellow());
            println!();
            println!("Run 'tradeline config init' to create a configuration file.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/nonexistent/custom.json");
        assert_eq!(resolve_config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/custom.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tradeline.json");
        fs::write(&path, r#"{"paths": {"input_extension": "txt"}}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.paths.input_extension, "txt");
    }
}
