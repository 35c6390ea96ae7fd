use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::remote::GoogleBooksConfig;
use crate::search::{SearchOptions, DEFAULT_MIN_QUERY_LEN};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("scaffale.db")
}

/// Remote metadata provider configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RemoteConfig {
    /// Base URL override for the Google Books API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional API key for higher quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl From<RemoteConfig> for GoogleBooksConfig {
    fn from(config: RemoteConfig) -> Self {
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }
}

/// Search session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Queries shorter than this never trigger a remote call.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Debounce window between keystrokes and the remote call, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SearchConfig {
    /// Controller options derived from this configuration.
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            min_query_len: self.min_query_len,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

fn default_debounce_ms() -> u64 {
    250
}
