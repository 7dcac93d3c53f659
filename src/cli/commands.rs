//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{greet, sum_numbers},
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Greet { .. } => execute_greet_command(config),
        Command::Sum { .. } => execute_sum_command(config),
    }
}

/// Execute the greet command
#[instrument(skip(config))]
fn execute_greet_command(config: &Config) -> anyhow::Result<()> {
    for line in greet(&config.greet.name, config.greet.times) {
        println!("{line}");
    }

    info!("Greeting complete");
    Ok(())
}

/// Execute the sum command
#[instrument(skip(config))]
fn execute_sum_command(config: &Config) -> anyhow::Result<()> {
    let total = sum_numbers(&config.sum.values).context("Failed to sum numbers")?;

    // Debug formatting keeps the trailing .0 on whole totals
    println!("{total:?}");

    debug!("Summed {} values", config.sum.values.len());
    Ok(())
}
