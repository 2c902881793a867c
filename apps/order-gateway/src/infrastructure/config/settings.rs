//! Gateway Configuration Settings
//!
//! Configuration types for the gateway, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::infrastructure::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, OpenAiConfig};

/// Default CORS origin (the local frontend dev server).
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind address.
    pub host: IpAddr,
    /// HTTP port.
    pub port: u16,
}

impl ServerSettings {
    /// Socket address to bind.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

/// Cross-origin settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// Complete gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Cross-origin settings.
    pub cors: CorsSettings,
    /// Language-model provider settings.
    pub openai: OpenAiConfig,
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be used.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let host = match lookup("ORDER_GATEWAY_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ORDER_GATEWAY_HOST".to_string(),
                value,
            })?,
            None => defaults.host,
        };

        let port = parse_or(&lookup, "ORDER_GATEWAY_PORT", defaults.port);

        let allowed_origins = lookup("ORDER_GATEWAY_CORS_ORIGINS").map_or_else(
            || CorsSettings::default().allowed_origins,
            |value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            },
        );

        let openai = OpenAiConfig::new(lookup("OPENAI_API_KEY"))
            .with_base_url(lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_model(lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_timeout(
                lookup("OPENAI_TIMEOUT_SECS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            );

        Ok(Self {
            server: ServerSettings { host, port },
            cors: CorsSettings { allowed_origins },
            openai,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable has a value that cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
