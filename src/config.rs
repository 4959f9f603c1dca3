//! Configuration file parser for ~/.config/coinboard/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are accepted but logged, since they are usually typos.
use crate::market::{DEFAULT_BASE_URL, DEFAULT_MOVER_COUNT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("HOME environment variable not set")]
    NoHome,
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
///
/// Custom Debug impl masks `coingecko_api_key`.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Quote currency for the market listing.
    pub vs_currency: String,

    /// Number of assets in the market table.
    pub per_page: u32,

    /// CoinGecko API root, without trailing slash.
    pub api_base_url: String,

    /// CoinGecko demo API key (alternative to COINGECKO_API_KEY env var).
    /// Env var takes precedence over config file.
    pub coingecko_api_key: Option<String>,

    /// RSS feed shown in the news panel.
    pub news_feed_url: String,

    /// Maximum number of feed items considered for the news panel.
    pub max_news_items: usize,

    /// Coins per gainers/losers card.
    pub mover_count: usize,

    pub markets_refresh_secs: u64,
    pub global_refresh_secs: u64,
    pub news_refresh_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            vs_currency: "usd".to_string(),
            per_page: 80,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            coingecko_api_key: None,
            news_feed_url: "https://www.coindesk.com/arc/outboundfeeds/rss/".to_string(),
            max_news_items: 5,
            mover_count: DEFAULT_MOVER_COUNT,
            markets_refresh_secs: 60,
            global_refresh_secs: 120,
            news_refresh_secs: 300,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("theme", &self.theme)
            .field("vs_currency", &self.vs_currency)
            .field("per_page", &self.per_page)
            .field("api_base_url", &self.api_base_url)
            .field(
                "coingecko_api_key",
                &self.coingecko_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("news_feed_url", &self.news_feed_url)
            .field("max_news_items", &self.max_news_items)
            .field("mover_count", &self.mover_count)
            .field("markets_refresh_secs", &self.markets_refresh_secs)
            .field("global_refresh_secs", &self.global_refresh_secs)
            .field("news_refresh_secs", &self.news_refresh_secs)
            .finish()
    }
}

const KNOWN_KEYS: [&str; 11] = [
    "theme",
    "vs_currency",
    "per_page",
    "api_base_url",
    "coingecko_api_key",
    "news_feed_url",
    "max_news_items",
    "mover_count",
    "markets_refresh_secs",
    "global_refresh_secs",
    "news_refresh_secs",
];

/// Refresh windows are clamped to this floor to stay inside the public
/// API rate limit.
const MIN_REFRESH_SECS: u64 = 10;

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Default location: `~/.config/coinboard/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var_os("HOME").ok_or(ConfigError::NoHome)?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("coinboard")
            .join("config.toml"))
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            feed = %config.news_feed_url,
            per_page = config.per_page,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// API key from `COINGECKO_API_KEY`, falling back to the config file.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("COINGECKO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.coingecko_api_key.clone())
    }

    pub fn markets_refresh(&self) -> Duration {
        refresh_window(self.markets_refresh_secs)
    }

    pub fn global_refresh(&self) -> Duration {
        refresh_window(self.global_refresh_secs)
    }

    pub fn news_refresh(&self) -> Duration {
        refresh_window(self.news_refresh_secs)
    }
}

fn refresh_window(secs: u64) -> Duration {
    Duration::from_secs(secs.max(MIN_REFRESH_SECS))
}

// ============================================================================
// Tests
// ============================================================================
