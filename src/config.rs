//! Runtime configuration read from the environment (optionally seeded by a `.env` file).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,
    /// Postgres connection string; the bot falls back to an in-memory store without it.
    pub database_url: Option<String>,
    pub prefix: String,
    /// Directory holding `items.json`, `ranks.json` and `profanity.txt` overrides.
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
}

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LOG_FILTER: &str = "info,guildmaster_bot=debug";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let server_id = get("SERVER_ID").ok_or(ConfigError::Missing("SERVER_ID"))?;
        let guild_id = server_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or(ConfigError::Invalid {
                key: "SERVER_ID",
                value: server_id,
            })?;

        Ok(Self {
            discord_token,
            guild_id,
            database_url: get("DATABASE_URL"),
            prefix: get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            data_dir: get("DATA_DIR").map(PathBuf::from),
            log_filter: get("LOG_FILTER")
                .or_else(|| get("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
