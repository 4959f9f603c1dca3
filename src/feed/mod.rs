//! News feed retrieval and item extraction.
//!
//! - [`extract`] - Pattern-based RSS item extraction with field cleaning
//! - [`fetcher`] - HTTP retrieval that degrades every failure to an empty list
//!
//! # Example
//!
//! ```ignore
//! use coinboard::feed::{extract, load_news};
//!
//! let items = extract(&markup, 5);
//! let latest = load_news(&client, "https://example.com/rss", 5).await;
//! ```

mod extract;
mod fetcher;

pub use extract::{clean_field, extract, ExtractError, FeedExtractor, FeedItem};
pub use fetcher::{fetch_markup, load_news};
