//! Application configuration module
//!
//! Configuration is read from an optional TOML file and then overridden by
//! environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `CONFIG_PATH` | path of the TOML file (default `config/moviefav.toml`) |
//! | `SERVER_HOST` / `SERVER_PORT` | `server.host` / `server.port` |
//! | `JWT_SECRET` | `server.jwt_secret_key` |
//! | `ACCESS_TOKEN_DURATION_SECS` | `server.access_token_duration_secs` |
//! | `DATABASE_URL` | `database.url` |
//! | `DATABASE_MAX_CONNECTIONS` | `database.max_connections` |
//! | `LOG_LEVEL` | `logger.level` |

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/moviefav.toml";

/// Shortest accepted HMAC secret, in bytes
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Longest accepted access token lifetime: one year
pub const MAX_ACCESS_TOKEN_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logger: LoggerConfig,
}

/// HTTP server and token settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HMAC key used to sign access tokens
    pub jwt_secret_key: String,
    /// Lifetime of an issued access token
    pub access_token_duration_secs: u64,
    /// Requests still running after this long are abandoned
    pub request_timeout_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            jwt_secret_key: String::new(),
            access_token_duration_secs: 15 * 60,
            request_timeout_secs: 30,
            bcrypt_cost: 12,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn access_token_duration(&self) -> chrono::Duration {
        i64::try_from(self.access_token_duration_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://moviefav.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `CONFIG_PATH` (or the default path) and the environment
    ///
    /// A missing file is not an error: defaults are used and the environment
    /// is expected to supply at least `JWT_SECRET`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Override fields with any environment variables that are set
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_env("SERVER_PORT")? {
            self.server.port = port;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.server.jwt_secret_key = secret;
        }
        if let Some(secs) = parse_env("ACCESS_TOKEN_DURATION_SECS")? {
            self.server.access_token_duration_secs = secs;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = parse_env("DATABASE_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logger.level = level;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.jwt_secret_key.is_empty() {
            return Err(ConfigError::MissingValue("server.jwt_secret_key"));
        }
        if self.server.jwt_secret_key.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::invalid(
                "server.jwt_secret_key",
                format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "must not be 0"));
        }
        if !(1..=MAX_ACCESS_TOKEN_DURATION_SECS).contains(&self.server.access_token_duration_secs) {
            return Err(ConfigError::invalid(
                "server.access_token_duration_secs",
                format!("must be between 1 and {} seconds", MAX_ACCESS_TOKEN_DURATION_SECS),
            ));
        }
        if !(4..=31).contains(&self.server.bcrypt_cost) {
            return Err(ConfigError::invalid("server.bcrypt_cost", "must be between 4 and 31"));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::MissingValue("database.url"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::invalid("database.max_connections", "must be greater than 0"));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, format!("cannot parse '{}'", raw))),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn jwt_secret_key(mut self, secret: impl Into<String>) -> Self {
        self.config.server.jwt_secret_key = secret.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn access_token_duration_secs(mut self, secs: u64) -> Self {
        self.config.server.access_token_duration_secs = secs;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.server.bcrypt_cost = cost;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database.url = url.into();
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.config.database.max_connections = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}
