//! Runtime configuration, read from environment variables.

use std::net::SocketAddr;

use anyhow::{Context, anyhow};

use stockflow_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "STOCKFLOW_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "STOCKFLOW_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr}"))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => LogFormat::parse(&raw).ok_or_else(|| {
                anyhow!("{LOG_FORMAT_VAR} must be `json` or `pretty`, got `{raw}`")
            })?,
            None => LogFormat::default(),
        };

        Ok(Self { bind_addr, log_format })
    }
}
