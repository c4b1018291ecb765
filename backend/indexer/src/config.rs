//! Application configuration loaded from environment variables.

use crate::errors::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// Registry contract addresses to follow (Strkey format); never empty
    pub contract_ids: Vec<String>,
    /// Path to the SQLite database file
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
}

/// Environment variables naming the three registry contracts.
const CONTRACT_ID_VARS: [&str; 3] = ["DONOR_REGISTRY_ID", "RECIPIENT_REGISTRY_ID", "IMPACT_LEDGER_ID"];

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing optional keys fall
    /// back to defaults; malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contract_ids: Vec<String> = CONTRACT_ID_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        if contract_ids.is_empty() {
            return Err(IndexerError::Config(format!(
                "at least one of {} is required",
                CONTRACT_ID_VARS.join(", ")
            )));
        }

        Ok(Config {
            rpc_url: lookup("RPC_URL")
                .unwrap_or_else(|| "https://soroban-testnet.stellar.org".to_string()),
            contract_ids,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:./aid_events.db".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 3001)?,
            poll_interval_secs: parse_or(&lookup, "POLL_INTERVAL_SECS", 5)?,
            events_per_page: parse_or(&lookup, "EVENTS_PER_PAGE", 100)?,
            start_ledger: parse_or(&lookup, "START_LEDGER", 0)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| IndexerError::Config(format!("Invalid {key}: {raw}"))),
        None => Ok(default),
    }
}
