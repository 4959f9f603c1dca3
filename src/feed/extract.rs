//! Pattern-based item extraction for RSS-shaped markup.
//!
//! This is not an XML parser. Feeds are segmented into item blocks with a
//! non-greedy container match, and each field is the first `<tag>...</tag>`
//! inside its block. Every field then goes through the same cleaning
//! pipeline:
//!
//! 1. decode `&amp;` `&quot;` `&#39;` `&lt;` `&gt;` (nothing else)
//! 2. trim
//! 3. unwrap a whole-value `<![CDATA[...]]>` wrapper, trimming the inner text
//! 4. repair a leading `https:/x` into `https://x`
//! 5. trim
//!
//! Malformed input never produces an error: missing fields become empty
//! strings, and items without a title or link are dropped.

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use thiserror::Error;

/// One cleaned feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Publication date exactly as the feed wrote it (after cleaning).
    pub published: String,
}

impl FeedItem {
    /// Parses `published` as RFC 2822 (RSS `pubDate`) or RFC 3339.
    ///
    /// Returns `None` for empty or unrecognised dates; the item itself is
    /// still valid.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published.as_str();
        if raw.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),
}

static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|quot|#39|lt|gt);").expect("Invalid entity pattern")
});

static CDATA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^<!\[CDATA\[(.*)\]\]>$").expect("Invalid CDATA pattern")
});

/// `https:/` followed by anything but a second slash.
static BROKEN_HTTPS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https:/([^/])").expect("Invalid https repair pattern"));

static RSS_EXTRACTOR: LazyLock<FeedExtractor> = LazyLock::new(|| {
    FeedExtractor::with_tags("item", "title", "link", "pubDate")
        .expect("Invalid RSS extractor tags")
});

/// Extracts items from feed markup using a fixed set of tag names.
///
/// Patterns are compiled once at construction; `extract` itself allocates
/// only for the returned items.
#[derive(Debug, Clone)]
pub struct FeedExtractor {
    container: Regex,
    title: Regex,
    link: Regex,
    published: Regex,
}

impl FeedExtractor {
    /// The shared extractor for RSS 2.0 (`item` / `title` / `link` / `pubDate`).
    pub fn rss() -> &'static FeedExtractor {
        &RSS_EXTRACTOR
    }

    /// Builds an extractor for arbitrary tag names. Names are matched
    /// literally and case-insensitively.
    pub fn with_tags(
        container: &str,
        title: &str,
        link: &str,
        published: &str,
    ) -> Result<Self, ExtractError> {
        // Open tag may carry attributes, but `<items>` must not match `item`.
        let container = Regex::new(&format!(
            r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>",
            tag = regex::escape(container)
        ))?;

        Ok(Self {
            container,
            title: field_pattern(title)?,
            link: field_pattern(link)?,
            published: field_pattern(published)?,
        })
    }

    /// Returns at most `max_items` cleaned items in document order.
    ///
    /// The first `max_items` blocks are taken before filtering, so blocks
    /// with an empty title or link still use up a slot.
    pub fn extract(&self, markup: &str, max_items: usize) -> Vec<FeedItem> {
        self.container
            .captures_iter(markup)
            .take(max_items)
            .filter_map(|caps| {
                let block = caps.get(1).map_or("", |m| m.as_str());
                self.extract_block(block)
            })
            .collect()
    }

    fn extract_block(&self, block: &str) -> Option<FeedItem> {
        let title = clean_field(first_field(&self.title, block));
        let link = clean_field(first_field(&self.link, block));

        if title.is_empty() || link.is_empty() {
            tracing::debug!(title = %title, link = %link, "Skipping feed item without title or link");
            return None;
        }

        Some(FeedItem {
            title,
            link,
            published: clean_field(first_field(&self.published, block)),
        })
    }
}

fn field_pattern(tag: &str) -> Result<Regex, regex::Error> {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?is)<{tag}>(.*?)</{tag}>"))
}

fn first_field<'a>(pattern: &Regex, block: &'a str) -> &'a str {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Extracts RSS items from `markup`; see [`FeedExtractor::extract`].
pub fn extract(markup: &str, max_items: usize) -> Vec<FeedItem> {
    FeedExtractor::rss().extract(markup, max_items)
}

/// Runs the cleaning pipeline on a raw field value.
pub fn clean_field(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let mut value: &str = decoded.trim();

    if let Some(inner) = CDATA_PATTERN.captures(value).and_then(|caps| caps.get(1)) {
        value = inner.as_str().trim();
    }

    let repaired = BROKEN_HTTPS_PATTERN.replace(value, "https://${1}");
    repaired.trim().to_string()
}

/// Single left-to-right pass, so `&amp;lt;` becomes `&lt;` rather than `<`.
fn decode_entities(raw: &str) -> Cow<'_, str> {
    ENTITY_PATTERN.replace_all(raw, |caps: &Captures| match &caps[0] {
        "&amp;" => "&",
        "&quot;" => "\"",
        "&#39;" => "'",
        "&lt;" => "<",
        _ => ">",
    })
}
