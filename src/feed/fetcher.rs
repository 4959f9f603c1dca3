use crate::feed::extract::{extract, FeedItem};
use crate::http::{get_limited, FetchError};
use std::time::Duration;

const FEED_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_FEED_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Fetches the raw feed body as text.
///
/// Invalid UTF-8 is replaced rather than rejected; the extractor copes with
/// whatever comes back.
///
/// # Errors
///
/// - [`FetchError::Network`] - Connection or TLS errors
/// - [`FetchError::Timeout`] - No response within 20 seconds
/// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
/// - [`FetchError::ResponseTooLarge`] - Body exceeded 5MB
pub async fn fetch_markup(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let bytes = get_limited(client.get(url), FEED_TIMEOUT, MAX_FEED_SIZE).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads up to `max_items` news items from `url`.
///
/// Every upstream failure degrades to an empty list; the error is logged
/// and the extractor is not invoked.
pub async fn load_news(client: &reqwest::Client, url: &str, max_items: usize) -> Vec<FeedItem> {
    match fetch_markup(client, url).await {
        Ok(markup) => {
            let items = extract(&markup, max_items);
            tracing::debug!(url = %url, items = items.len(), "Loaded news feed");
            items
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "News feed unavailable");
            Vec::new()
        }
    }
}
