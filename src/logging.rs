//! Tracing setup. The TUI owns stdout and stderr, so it only logs when a
//! file is configured; CLI runs log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub(crate) fn init(config: &Config) -> Result<()> {
    if config.is_tui() {
        let Some(path) = &config.log_file else {
            return Ok(());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

/// `RUST_LOG` when set, `default` otherwise.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
