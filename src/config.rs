//! Process configuration read from the environment (and an optional `.env`).

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::openverse::DEFAULT_BASE_URL;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("MCP_TRANSPORT must be 'stdio' or 'http', got '{0}'")]
    UnknownTransport(String),
}

/// How the server talks to its MCP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http,
}

impl std::str::FromStr for Transport {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::UnknownTransport(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub api_base: Url,
    pub request_timeout: Option<Duration>,
    pub transport: Transport,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let base = get("OPENVERSE_API_BASE").unwrap_or(DEFAULT_BASE_URL);
        let api_base = Url::parse(base).map_err(|_| ConfigError::InvalidUrl {
            name: "OPENVERSE_API_BASE",
            value: base.to_string(),
        })?;

        let request_timeout = get("OPENVERSE_TIMEOUT_SECS")
            .map(|v| parse_number::<u64>("OPENVERSE_TIMEOUT_SECS", v))
            .transpose()?
            .map(Duration::from_secs);

        let transport = get("MCP_TRANSPORT")
            .map(str::parse::<Transport>)
            .transpose()?
            .unwrap_or(Transport::Stdio);

        let port = get("MCP_PORT")
            .map(|v| parse_number::<u16>("MCP_PORT", v))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_base,
            request_timeout,
            transport,
            host: get("MCP_HOST").unwrap_or(DEFAULT_HOST).to_string(),
            port,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
