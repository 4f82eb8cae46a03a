use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CONSENT_API_PORT: {0}")]
    InvalidPort(String),

    #[error("invalid CONSENT_API_HOST: {0}")]
    InvalidHost(String),
}

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Allow any origin, method and header.
    pub cors_any: bool,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_any: false,
            lambda: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. `from_env` wraps this.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CONSENT_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CONSENT_API_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let cors_any = lookup("CONSENT_API_CORS_ANY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let lambda = lookup("AWS_LAMBDA_RUNTIME_API").is_some();

        Ok(Self {
            host,
            port,
            cors_any,
            lambda,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
