use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::probe::ProbeConfig;
use crate::ProbeRecordType;

/// Main configuration structure for the RESINFO probe
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// What to query and where
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. resinfo-probe.toml in current directory
    /// 3. /etc/resinfo-probe/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.resolvers.is_empty() {
            self.probe.resolvers = overrides.resolvers;
        }
        if let Some(domain) = overrides.domain {
            self.probe.domain = domain;
        }
        if let Some(port) = overrides.port {
            self.probe.port = port;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.probe.query_timeout = timeout;
        }
        if let Some(record_types) = overrides.record_types {
            self.probe.record_types = record_types;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.domain.trim().is_empty() {
            return Err(ConfigError::Validation("Probe domain cannot be empty".to_string()));
        }

        if self.probe.port == 0 {
            return Err(ConfigError::Validation("Resolver port cannot be 0".to_string()));
        }

        if self.probe.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        if self.probe.record_types.is_empty() {
            return Err(ConfigError::Validation(
                "No record types configured".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("resinfo-probe.toml").exists() {
            Some("resinfo-probe.toml".to_string())
        } else if std::path::Path::new("/etc/resinfo-probe/config.toml").exists() {
            Some("/etc/resinfo-probe/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolvers: Vec<String>,
    pub domain: Option<String>,
    pub port: Option<u16>,
    pub query_timeout: Option<u64>,
    pub record_types: Option<Vec<ProbeRecordType>>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
}
