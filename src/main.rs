#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use mytool::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on verbosity count
    setup_logging(args.verbose)?;

    // Initialize configuration
    let config = Config::from_args(&args);

    // Execute the appropriate command
    cli::execute_command(&config, &args.command)
}
