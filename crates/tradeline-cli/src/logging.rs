//! Per-run tracing subscriber: stderr plus an append-mode log file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Map `-v` occurrences to a stderr level.
pub fn verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the subscriber for one invocation.
///
/// `RUST_LOG` overrides the level chosen by `-v` on stderr. The log file, when
/// given, always records debug and above.
pub fn subscriber(
    verbose: u8,
    log_file: Option<PathBuf>,
) -> anyhow::Result<impl Subscriber + Send + Sync + 'static> {
    let stderr_filter = EnvFilter::builder()
        .with_default_directive(verbosity(verbose).into())
        .from_env_lossy();

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let file = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry().with(stderr).with(file))
}
