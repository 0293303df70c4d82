//! Configuration management
//!
//! Loads configuration from environment variables (and an optional `.env`
//! file), with support for different environments (development, staging,
//! production).

use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment value: {0}")]
    InvalidValue(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse environment from string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid environment: '{}'. Expected: dev, staging, or prod",
                s
            ))),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,

    /// Current environment
    pub environment: Environment,

    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Maximum database connections
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    pub db_acquire_timeout_secs: u64,

    /// CORS allowed origins (comma-separated)
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|s| Environment::parse(&s))
            .unwrap_or(Ok(Environment::Development))?;

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => assemble_database_url(&lookup)?,
        };

        let host = lookup("HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue("HOST must be an IP address".to_string()))?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8010".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);

        let db_acquire_timeout_secs = lookup("DB_ACQUIRE_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS");

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            database_url,
            environment,
            host,
            port,
            db_max_connections,
            db_acquire_timeout_secs,
            cors_allowed_origins,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get database URL with the password masked, for logging
    pub fn database_url_masked(&self) -> String {
        let url = &self.database_url;
        let Some(authority_start) = url.find("://").map(|i| i + 3) else {
            return url.clone();
        };
        let Some(at_pos) = url.rfind('@').filter(|&at| at > authority_start) else {
            return url.clone();
        };

        // user:password; the password may itself contain ':'
        match url[authority_start..at_pos].find(':') {
            Some(colon) => {
                let prefix = &url[..authority_start + colon + 1];
                let suffix = &url[at_pos..];
                format!("{}****{}", prefix, suffix)
            }
            None => url.clone(),
        }
    }
}

/// Build a Postgres URL from the `APP_DB_*` variables
fn assemble_database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let name = lookup("APP_DB_NAME")
        .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL or APP_DB_NAME".to_string()))?;
    let host = lookup("APP_DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = lookup("APP_DB_PORT")
        .unwrap_or_else(|| "5432".to_string())
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort("APP_DB_PORT must be a valid number".to_string()))?;

    let credentials = match (lookup("APP_DB_USERNAME"), lookup("APP_DB_PASSWORD")) {
        (Some(user), Some(password)) => format!(
            "{}:{}@",
            urlencoding::encode(&user),
            urlencoding::encode(&password)
        ),
        (Some(user), None) => format!("{}@", urlencoding::encode(&user)),
        (None, _) => String::new(),
    };

    Ok(format!(
        "postgres://{}{}:{}/{}",
        credentials,
        host,
        port,
        urlencoding::encode(&name)
    ))
}
