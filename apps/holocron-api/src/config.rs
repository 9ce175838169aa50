//! Environment configuration for the HTTP server

use std::time::Duration;

use anyhow::{Context, Result};
use holocron_domain::PlanetServiceConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_READ_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_WRITE_TIMEOUT_MS: u64 = 20_000;

/// Server settings read from `API_*` variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            write_timeout: Duration::from_millis(DEFAULT_WRITE_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Read `API_HOST`, `API_PORT`, `API_READ_TIMEOUT_MS` and `API_WRITE_TIMEOUT_MS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("API_PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("API_PORT is not a valid port: {value}"))?,
            None => DEFAULT_PORT,
        };
        let read_timeout = millis(&var, "API_READ_TIMEOUT_MS", DEFAULT_READ_TIMEOUT_MS)?;
        let write_timeout = millis(&var, "API_WRITE_TIMEOUT_MS", DEFAULT_WRITE_TIMEOUT_MS)?;

        Ok(Self {
            host,
            port,
            read_timeout,
            write_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn service_config(&self) -> PlanetServiceConfig {
        PlanetServiceConfig {
            read_timeout: self.read_timeout,
            write_timeout: self.write_timeout,
        }
    }
}

fn millis(var: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> Result<Duration> {
    let ms = match var(name) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{name} is not a number of milliseconds: {value}"))?,
        None => default,
    };
    Ok(Duration::from_millis(ms))
}
