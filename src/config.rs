//! Configuration management for mytool
//!
//! Centralizes the per-invocation settings and provides validation.
//! Nothing here is persisted; a `Config` lives for one invocation only.

use crate::cli::Args;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Verbosity count from -v flags
    pub verbose: u8,
    /// Greet command configuration
    pub greet: GreetConfig,
    /// Sum command configuration
    pub sum: SumConfig,
}

/// Greet command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetConfig {
    /// Name to greet
    pub name: String,
    /// Effective repeat count, always at least 1
    pub times: u64,
}

/// Sum command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumConfig {
    /// Raw tokens to coerce and sum
    pub values: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: 0,
            greet: GreetConfig::default(),
            sum: SumConfig::default(),
        }
    }
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            times: 1,
        }
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self {
            verbose: args.verbose,
            ..Self::default()
        };

        // Copy command-specific options, normalizing as we go
        match &args.command {
            crate::cli::Command::Greet { name, times } => {
                config.greet.name = name.clone();
                // Zero or negative counts silently become 1
                config.greet.times = (*times).max(1) as u64;
            }
            crate::cli::Command::Sum { numbers } => {
                config.sum.values = numbers.clone();
            }
        }

        config
    }
}
