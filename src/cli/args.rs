//! CLI argument definitions using clap
//!
//! Commands:
//! - phonebook serve [--config <path>] [--port <port>]
//! - phonebook check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Phonebook - a small REST service for names and phone numbers
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when it does not exist
        #[arg(long, default_value = "./phonebook.json")]
        config: PathBuf,

        /// Port to listen on, overriding the configuration file
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Load a few sample persons at startup
        #[arg(long)]
        seed: bool,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./phonebook.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["phonebook", "serve", "--port", "4000", "--seed"]).unwrap();
        match cli.command {
            Command::Serve { config, port, seed } => {
                assert_eq!(config, PathBuf::from("./phonebook.json"));
                assert_eq!(port, Some(4000));
                assert!(seed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["phonebook", "check-config", "--config", "/tmp/pb.json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config } if config == PathBuf::from("/tmp/pb.json")
        ));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["phonebook", "serve", "--port", "http"]).is_err());
    }
}
