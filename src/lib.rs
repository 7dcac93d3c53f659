//! # mytool
//!
//! A small command-line utility with two subcommands: `greet` prints a
//! greeting a configurable number of times, `sum` totals a list of numbers.
//! Verbosity flags (`-v`, `-vv`) raise the log threshold from warnings to
//! info and debug output.
//!
//! ## Example
//!
//! ```no_run
//! use mytool::core::greet;
//!
//! for line in greet::greet("Ada", 2) {
//!     println!("{line}");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging from the `-v` count: 0 -> warn, 1 -> info, 2+ -> debug.
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::new(verbosity_level(verbosity));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Map a verbosity count to a log level directive, clamped at debug.
fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
