//! Command-line argument parsing and validation

use clap::{ArgAction, Parser, Subcommand};

/// mytool - A small CLI demonstrating subcommands and verbosity-based logging
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "mytool")]
pub struct Args {
    /// Increase log verbosity: -v (info), -vv (debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greet someone
    Greet {
        /// Name to greet
        name: String,

        /// Number of times to repeat the greeting
        #[arg(short = 't', long = "times", default_value_t = 1, allow_negative_numbers = true)]
        times: i64,
    },

    /// Sum a list of numbers
    Sum {
        /// Numbers to sum
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
