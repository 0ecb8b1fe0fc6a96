use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default buffered-reader capacity for scanned files (10 MiB)
pub const DEFAULT_READ_BUFFER_BYTES: usize = 10 * 1024 * 1024;

/// Default request body limit for the echo server (10 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from ferret.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub scan: ScanSettings,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    pub min_chars: usize,
    pub pattern: Option<String>,
    pub read_buffer_bytes: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            min_chars: 4,
            pattern: None,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}

/// Echo server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "ferret_finder=debug"
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ferret.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("ferret").required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    /// Load from `path` when given, otherwise from the default locations
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = AppConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("scan.min_chars", defaults.scan.min_chars as i64)?
            .set_default(
                "scan.read_buffer_bytes",
                defaults.scan.read_buffer_bytes as i64,
            )?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default(
                "server.max_body_bytes",
                defaults.server.max_body_bytes as i64,
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(file)
            // FERRET_SCAN__MIN_CHARS=8 overrides scan.min_chars, etc.
            .add_source(
                Environment::with_prefix("FERRET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject values that would make a scan or the server misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.read_buffer_bytes == 0 {
            return Err(ConfigError::Message(
                "scan.read_buffer_bytes must be greater than 0".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "server.max_body_bytes must be greater than 0".to_string(),
            ));
        }
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}
