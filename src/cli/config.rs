//! Configuration file
//!
//! JSON, every key optional:
//!
//! ```json
//! { "host": "0.0.0.0", "port": 3001, "cors_origins": [],
//!   "access_log": true, "seed_sample_data": false, "log_level": "info" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener, CORS and access log settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Start with a few sample persons (default: false)
    #[serde(default)]
    pub seed_sample_data: bool,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed_sample_data: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or defaults when the file is absent
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(mut self, port: Option<u16>, seed: bool) -> CliResult<Self> {
        if let Some(port) = port {
            self.http.port = port;
        }
        self.seed_sample_data |= seed;
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.http.parse_socket_addr().map_err(|e| {
            CliError::config_error(format!(
                "Invalid listen address '{}': {}",
                self.http.socket_addr(),
                e
            ))
        })?;

        self.severity()?;

        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}
