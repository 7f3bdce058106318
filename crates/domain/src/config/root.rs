use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    ConfigError, DnsConfig, LoggingConfig, MirrorConfig, ServerConfig, WAIT_CEILING_MS,
};
use crate::validators::validate_correlation_header;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub mirror: MirrorConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub worker_pool_size: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file (or defaults when no path is
    /// given) and apply CLI overrides on top.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    pub fn from_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(workers) = overrides.worker_pool_size {
            self.mirror.worker_pool_size = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mirror.worker_pool_size == 0 {
            return Err(ConfigError::Validation(
                "mirror.worker_pool_size must be greater than 0".to_string(),
            ));
        }
        if self.mirror.max_wait_ms == 0 {
            return Err(ConfigError::Validation(
                "mirror.max_wait_ms must be greater than 0".to_string(),
            ));
        }
        if self.mirror.max_wait_ms > WAIT_CEILING_MS {
            return Err(ConfigError::Validation(format!(
                "mirror.max_wait_ms cannot exceed {WAIT_CEILING_MS}, got {}",
                self.mirror.max_wait_ms
            )));
        }
        validate_correlation_header(&self.mirror.correlation_header)
            .map_err(|e| ConfigError::Validation(format!("mirror.correlation_header: {e}")))?;

        if self.dns.max_ping_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.max_ping_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.dns.default_ping_timeout_ms > self.dns.max_ping_timeout_ms {
            return Err(ConfigError::Validation(
                "dns.default_ping_timeout_ms cannot exceed dns.max_ping_timeout_ms".to_string(),
            ));
        }
        if self.dns.resolve_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.resolve_timeout_ms must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
