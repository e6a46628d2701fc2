use std::env;
use std::net::SocketAddr;
use axum::http::HeaderValue;
use crate::error::{ConfigError, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub production: bool,
    pub allowed_origins: Vec<HeaderValue>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup` so tests don't have to touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr { value: raw_addr.clone(), source })?;

        let production = lookup("RUST_ENV").is_some_and(|v| v == "production");

        let origins = lookup("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();
        let allowed_origins = if origins.is_empty() {
            if production {
                return Err(ConfigError::Origins(
                    "ALLOWED_ORIGINS must contain at least one valid origin in production",
                ));
            }
            DEV_ORIGINS.into_iter().map(HeaderValue::from_static).collect()
        } else {
            origins
        };

        Ok(Self {
            bind_addr,
            production,
            allowed_origins,
            rate_limit_per_second: lookup("RATE_LIMIT_PER_SECOND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1200),
            rate_limit_burst: lookup("RATE_LIMIT_BURST")
                .and_then(|v| v.parse().ok())
                .unwrap_or(2400),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid ALLOWED_ORIGINS entry: {}", trimmed);
                    None
                }
            }
        })
        .collect()
}
