//! Core functionality for the CLI commands
//!
//! Contains the logic for generating greetings and summing numeric tokens,
//! kept free of any I/O so it stays trivially testable.

pub mod greet;
pub mod sum;

pub use greet::greet;
pub use sum::sum_numbers;
