//! Integration tests for news item extraction: cleaning rules, item limits,
//! and properties that must hold for arbitrary markup.

use coinboard::feed::{clean_field, extract, FeedExtractor, FeedItem};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn item(title: &str, link: &str) -> String {
    format!("<item><title>{title}</title><link>{link}</link></item>")
}

// ============================================================================
// Cleaning
// ============================================================================

#[test]
fn test_ampersand_entities_decode() {
    let markup = item("&amp;Bitcoin&amp;", "https://example.com/btc");
    let items = extract(&markup, 5);
    assert_eq!(items[0].title, "&Bitcoin&");
}

#[test]
fn test_cdata_link_unwrapped_and_decoded() {
    let markup = item(
        "Story",
        "<![CDATA[ https://example.com/a?x=1&amp;y=2 ]]>",
    );
    let items = extract(&markup, 5);
    assert_eq!(items[0].link, "https://example.com/a?x=1&y=2");
}

#[test]
fn test_cdata_link_with_raw_ampersand() {
    let markup = item("Story", "<![CDATA[https://example.com/a?x=1&y=2]]>");
    let items = extract(&markup, 5);
    assert_eq!(items[0].link, "https://example.com/a?x=1&y=2");
}

#[test]
fn test_single_slash_https_repaired() {
    let items = extract(&item("Story", "https:/example.com/feed"), 5);
    assert_eq!(items[0].link, "https://example.com/feed");
}

#[test]
fn test_valid_https_unchanged() {
    let items = extract(&item("Story", "https://example.com/feed"), 5);
    assert_eq!(items[0].link, "https://example.com/feed");
}

#[test]
fn test_double_encoded_entity_decodes_once() {
    assert_eq!(clean_field("&amp;lt;b&amp;gt;"), "&lt;b&gt;");
}

// ============================================================================
// Item selection
// ============================================================================

#[test]
fn test_missing_link_drops_item() {
    let markup = format!(
        "<item><title>No link here</title></item>{}",
        item("Linked", "https://example.com/linked")
    );
    let items = extract(&markup, 5);
    assert_eq!(
        items,
        vec![FeedItem {
            title: "Linked".to_string(),
            link: "https://example.com/linked".to_string(),
            published: String::new(),
        }]
    );
}

#[test]
fn test_seven_items_capped_at_five_in_order() {
    let markup: String = (1..=7)
        .map(|i| item(&format!("Story {i}"), &format!("https://example.com/{i}")))
        .collect();

    let titles: Vec<String> = extract(&markup, 5).into_iter().map(|i| i.title).collect();
    assert_eq!(
        titles,
        vec!["Story 1", "Story 2", "Story 3", "Story 4", "Story 5"]
    );
}

#[test]
fn test_invalid_block_still_uses_a_slot() {
    let markup = format!(
        "{}{}{}",
        item("", "https://example.com/untitled"),
        item("Second", "https://example.com/2"),
        item("Third", "https://example.com/3"),
    );
    let titles: Vec<String> = extract(&markup, 2).into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["Second"]);
}

#[test]
fn test_realistic_rss_document() {
    let markup = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Crypto Desk</title>
    <link>https://news.example.com</link>
    <item>
      <title><![CDATA[ETH staking yields &amp; what they mean]]></title>
      <link>https://news.example.com/eth-staking</link>
      <pubDate>Mon, 18 Mar 2024 14:30:00 +0000</pubDate>
    </item>
    <item id="2">
      <title>Miners sell &#39;record&#39; reserves</title>
      <link>https:/news.example.com/miners</link>
      <pubDate>Sun, 17 Mar 2024 09:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    let items = extract(markup, 5);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "ETH staking yields & what they mean");
    assert_eq!(items[1].title, "Miners sell 'record' reserves");
    assert_eq!(items[1].link, "https://news.example.com/miners");
    assert!(items[0].published_at().is_some());
    assert!(items[1].published_at().is_some());
}

#[test]
fn test_custom_tags() {
    let extractor = FeedExtractor::with_tags("entry", "title", "id", "updated").unwrap();
    let markup = "<entry><title>Atom-ish</title><id>https://example.com/x</id>\
                  <updated>2024-03-18T10:00:00Z</updated></entry>";
    let items = extractor.extract(markup, 5);
    assert_eq!(items[0].link, "https://example.com/x");
    assert_eq!(items[0].published, "2024-03-18T10:00:00Z");
}

// ============================================================================
// Properties
// ============================================================================

fn arb_item() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9 ]{0,20}", "[a-z0-9/.:]{0,20}").prop_map(|(t, l)| item(&t, &l))
}

proptest! {
    #[test]
    fn prop_no_containers_means_no_items(markup in "[^<]{0,200}", max in 0usize..20) {
        prop_assert!(extract(&markup, max).is_empty());
    }

    #[test]
    fn prop_never_more_than_max_items(
        blocks in prop::collection::vec(arb_item(), 0..15),
        max in 0usize..10,
    ) {
        let markup = blocks.concat();
        prop_assert!(extract(&markup, max).len() <= max);
    }

    #[test]
    fn prop_every_item_has_title_and_link(blocks in prop::collection::vec(arb_item(), 0..10)) {
        for item in extract(&blocks.concat(), 10) {
            prop_assert!(!item.title.is_empty());
            prop_assert!(!item.link.is_empty());
        }
    }

    #[test]
    fn prop_cleaning_is_idempotent_without_entities(raw in "[A-Za-z0-9 :/._-]{0,40}") {
        let once = clean_field(&raw);
        prop_assert_eq!(clean_field(&once), once);
    }
}
