use std::time::Duration;

use anyhow::{Context, Result};

use crate::enhance::DEFAULT_LATENCY;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated round trip of the heuristic enhancer.
    pub enhance_latency: Duration,
    /// `None` when `ENHANCE_TIMEOUT_MS=0`.
    pub enhance_timeout: Option<Duration>,
}

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let latency_ms = parse_millis(&lookup, "ENHANCE_LATENCY_MS")?
            .unwrap_or(DEFAULT_LATENCY.as_millis() as u64);
        let timeout_ms = parse_millis(&lookup, "ENHANCE_TIMEOUT_MS")?.unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            enhance_latency: Duration::from_millis(latency_ms),
            enhance_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
        })
    }
}

fn parse_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of milliseconds"))
        })
        .transpose()
}
