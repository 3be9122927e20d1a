use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};
use tracing::warn;

use crate::store::ScyllaConfig;

/// Which `OrderStore` implementation the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Scylla,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scylla" => Ok(StoreBackend::Scylla),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("unknown store backend {other:?}, expected \"scylla\" or \"memory\""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub scylla: ScyllaConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: try_load(&lookup, "CAKE_ORDER_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "CAKE_ORDER_PORT", "3000")?,
            store: try_load(&lookup, "CAKE_ORDER_STORE", "scylla")?,
            scylla: ScyllaConfig {
                uri: try_load(&lookup, "SCYLLA_URI", "127.0.0.1:9042")?,
                keyspace: try_load(&lookup, "SCYLLA_KEYSPACE", "cake_orders")?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        warn!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("invalid {key} value {raw:?}: {e}")
    })
}
