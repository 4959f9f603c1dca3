use crate::http::{get_limited, FetchError};
use crate::market::types::{Coin, GlobalData};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

const API_KEY_HEADER: &str = "x-cg-demo-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Unexpected response from market API: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid market API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the CoinGecko REST API.
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl std::fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl MarketClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: Option<SecretString>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetches one page of the market listing, ordered by market cap,
    /// including the 7-day sparkline and 1h/24h/7d changes.
    pub async fn coins(&self, vs_currency: &str, per_page: u32) -> Result<Vec<Coin>, MarketError> {
        let per_page = per_page.to_string();
        self.get_json(
            "/coins/markets",
            &[
                ("vs_currency", vs_currency),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "true"),
                ("price_change_percentage", "1h,24h,7d"),
            ],
        )
        .await
    }

    /// Fetches global market statistics.
    pub async fn global(&self) -> Result<GlobalData, MarketError> {
        self.get_json("/global", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MarketError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let mut request = self
            .http
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.expose_secret());
        }

        tracing::debug!(url = %url, "Requesting market data");
        let bytes = get_limited(request, REQUEST_TIMEOUT, MAX_RESPONSE_SIZE).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
