//! CLI module for the phonebook service
//!
//! Provides command-line interface for:
//! - serve: load configuration and run the HTTP server
//! - check-config: validate a configuration file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
