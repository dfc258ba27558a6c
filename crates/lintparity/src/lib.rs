//! # lintparity
//!
//! **CLI Binary**
//!
//! This is the entry point for the `lintparity` command-line application.
//! It reads linter output, hands it to the library crates, and prints the
//! result.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;

use lintparity_config::Cli;

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    commands::dispatch(cli)
}

/// Render an error chain plus any hints that apply to it.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
