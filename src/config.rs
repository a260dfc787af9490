use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SERVER_ADDRESS: &str = ":8088";
const DEFAULT_POOL_MAX: u32 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub postgres: PostgresConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PostgresConfig {
    /// Full connection URL. Takes precedence over the individual fields.
    pub url: Option<String>,
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub static_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub shutdown_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment. Call `dotenv` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let postgres = PostgresConfig {
            url: get("DATABASE_URL"),
            host: get("PSQL_HOST").unwrap_or_default(),
            port: get("PSQL_PORT").unwrap_or_default(),
            user: get("PSQL_USER").unwrap_or_default(),
            password: get("PSQL_PASSWORD").unwrap_or_default(),
            database: get("PSQL_DATABASE").unwrap_or_default(),
            ssl_mode: get("PSQL_SSLMODE").unwrap_or_default(),
            max_connections: parse_or("DB_POOL_MAX", get("DB_POOL_MAX"), DEFAULT_POOL_MAX)?,
        };

        if postgres.url.is_none() && postgres.host.is_empty() && postgres.port.is_empty() {
            return Err(ConfigError::MissingPostgres);
        }

        let shutdown_secs = parse_or(
            "SHUTDOWN_TIMEOUT_SECS",
            get("SHUTDOWN_TIMEOUT_SECS"),
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?;

        let server = ServerConfig {
            address: get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
            assets_dir: get("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./assets")),
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        };

        Ok(Config { postgres, server })
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

impl PostgresConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|_| ConfigError::InvalidValue {
                key: "DATABASE_URL",
                value: redact_url(url),
            });
        }

        let mut options = PgConnectOptions::new();
        if !self.host.is_empty() {
            options = options.host(&self.host);
        }
        if !self.port.is_empty() {
            let port = self
                .port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PSQL_PORT",
                    value: self.port.clone(),
                })?;
            options = options.port(port);
        }
        if !self.user.is_empty() {
            options = options.username(&self.user);
        }
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        if !self.database.is_empty() {
            options = options.database(&self.database);
        }
        if !self.ssl_mode.is_empty() {
            let ssl_mode =
                PgSslMode::from_str(&self.ssl_mode).map_err(|_| ConfigError::InvalidValue {
                    key: "PSQL_SSLMODE",
                    value: self.ssl_mode.clone(),
                })?;
            options = options.ssl_mode(ssl_mode);
        }
        Ok(options)
    }
}

// Keeps passwords out of error messages and logs
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

impl ServerConfig {
    /// Address to hand to the listener. `:8088` style addresses bind every
    /// interface.
    pub fn bind_address(&self) -> String {
        if self.address.starts_with(':') {
            format!("0.0.0.0{}", self.address)
        } else {
            self.address.clone()
        }
    }
}
