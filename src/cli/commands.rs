//! CLI command implementations

use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::store::InMemoryPersonStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port, seed } => serve(&config, port, seed),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: &Path, port: Option<u16>, seed: bool) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(port, seed)?;
    Logger::set_min_severity(config.severity()?);

    let store = if config.seed_sample_data {
        InMemoryPersonStore::with_sample_data()
    } else {
        InMemoryPersonStore::new()
    };

    let server = HttpServer::with_store(config.http, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load and validate a configuration file, printing it back as JSON
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    println!("{}", render_config(&config)?);
    Ok(())
}

/// Effective configuration as pretty JSON
pub fn render_config(config: &Config) -> CliResult<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))
}
