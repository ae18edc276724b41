//! Service configuration
//!
//! Loaded once at startup from a TOML file and handed to the layers that need
//! it. Environment variables prefixed with `REALSTATE_` override file values.

use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rest: RestConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Requests running longer than this are abandoned.
    pub request_timeout_secs: u64,
    /// Allow any CORS origin instead of localhost only.
    pub cors_permissive: bool,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            request_timeout_secs: 30,
            cors_permissive: false,
        }
    }
}

impl RestConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// PostgreSQL connection and pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Upper bound on open connections; idle connections are kept up to the same bound.
    pub max_connections: u32,
    /// Connections are retired after this long, and when idle for this long.
    pub conn_max_lifetime_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: String::new(),
            database: "realstate".to_string(),
            max_connections: 10,
            conn_max_lifetime_secs: 60,
            acquire_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    /// Connection options built from the individual fields, so credentials
    /// never pass through URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    pub fn conn_max_lifetime(&self) -> Duration {
        Duration::from_secs(self.conn_max_lifetime_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl AppConfig {
    /// Load config from `path`, then apply environment overrides and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides(|var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML text. Missing sections and keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override file values from `REALSTATE_*` variables.
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("REALSTATE_REST_PORT") {
            self.rest.port = parse_port("REALSTATE_REST_PORT", value)?;
        }
        if let Some(value) = lookup("REALSTATE_DATABASE_HOST") {
            self.database.host = value;
        }
        if let Some(value) = lookup("REALSTATE_DATABASE_PORT") {
            self.database.port = parse_port("REALSTATE_DATABASE_PORT", value)?;
        }
        if let Some(value) = lookup("REALSTATE_DATABASE_USERNAME") {
            self.database.username = value;
        }
        if let Some(value) = lookup("REALSTATE_DATABASE_PASSWORD") {
            self.database.password = value;
        }
        if let Some(value) = lookup("REALSTATE_DATABASE_NAME") {
            self.database.database = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.host.is_empty() {
            return Err(ConfigError::Invalid {
                field: "database.host",
                reason: "cannot be empty",
            });
        }
        if self.database.database.is_empty() {
            return Err(ConfigError::Invalid {
                field: "database.database",
                reason: "cannot be empty",
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                field: "database.max_connections",
                reason: "must be at least 1",
            });
        }
        if self.rest.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "rest.request_timeout_secs",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Copy with the database password masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if !config.database.password.is_empty() {
            config.database.password = "********".to_string();
        }
        config
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
