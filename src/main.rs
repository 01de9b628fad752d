mod config;
mod export;
mod ledger;
mod logging;
mod models;
mod query;
mod run;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let config = config::Config::from_env();
    logging::init(&config)?;

    let mut ledger = if config.seed {
        ledger::Ledger::seeded().context("Failed to load sample transactions")?
    } else {
        ledger::Ledger::new()
    };
    tracing::debug!(records = ledger.len(), seed = config.seed, "ledger ready");

    if config.is_tui() {
        run::as_tui(&mut ledger)
    } else {
        run::as_cli(&config.command, &ledger)
    }
}
