//! End-to-end tests for the one-shot board: all three sources served by a
//! mock server, fetched concurrently, then rendered as text.

use chrono::{TimeZone, Utc};
use coinboard::config::Config;
use coinboard::http::build_client;
use coinboard::market::MarketClient;
use coinboard::snapshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COINS_JSON: &str = r#"[
    {"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":64000,
     "market_cap":1.26e12,"market_cap_rank":1,"total_volume":3.1e10,
     "circulating_supply":19700000,"price_change_percentage_24h":2.5},
    {"id":"ethereum","symbol":"eth","name":"Ethereum","current_price":3100,
     "market_cap":3.7e11,"market_cap_rank":2,"total_volume":1.5e10,
     "circulating_supply":120000000,"price_change_percentage_24h":-1.75},
    {"id":"mystery","symbol":"mys","name":"Mystery","current_price":null,
     "market_cap":null,"market_cap_rank":null,"total_volume":null,
     "circulating_supply":null,"price_change_percentage_24h":null}
]"#;

const GLOBAL_JSON: &str = r#"{"data":{
    "total_market_cap":{"usd":2.45e12,"eur":2.2e12},
    "total_volume":{"usd":9.8e10},
    "market_cap_percentage":{"btc":52.3,"eth":16.9},
    "market_cap_change_percentage_24h_usd":-0.84
}}"#;

const RSS: &str = r#"<rss><channel>
  <item><title>Bitcoin holds &amp; steadies</title>
        <link>https://news.example.com/btc</link>
        <pubDate>Wed, 20 Mar 2024 08:00:00 +0000</pubDate></item>
  <item><title>Ether options expiry</title>
        <link><![CDATA[https:/news.example.com/eth]]></link></item>
</channel></rss>"#;

async fn mount(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        news_feed_url: format!("{}/rss", server.uri()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_snapshot_with_all_sources() {
    let server = MockServer::start().await;
    mount(&server, "/coins/markets", 200, COINS_JSON).await;
    mount(&server, "/global", 200, GLOBAL_JSON).await;
    mount(&server, "/rss", 200, RSS).await;

    let config = config_for(&server);
    let client = build_client().unwrap();
    let market = MarketClient::new(client.clone(), &config.api_base_url, None);

    let board = snapshot::load(&config, &market, &client).await;
    assert_eq!(board.coins.as_ref().unwrap().len(), 3);
    assert_eq!(board.news.len(), 2);
    assert_eq!(board.news[1].link, "https://news.example.com/eth");

    let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let text = snapshot::render_text(&board, 5, now);

    assert!(text.contains("Total Mkt Cap   $2.45T"));
    assert!(text.contains("24h Volume      $98B"));
    assert!(text.contains("BTC Dominance   52.30%"));
    assert!(text.contains("Mkt Cap 24h     -0.84%"));
    assert!(text.contains("Top Gainers 24h\n  BTC"));
    assert!(text.contains("Top Losers 24h\n  ETH"));
    assert!(text.contains("Bitcoin holds & steadies"));
    assert!(text.contains("Mystery MYS"));
}

#[tokio::test]
async fn test_snapshot_degrades_per_source() {
    let server = MockServer::start().await;
    mount(&server, "/coins/markets", 429, "rate limited").await;
    mount(&server, "/global", 200, GLOBAL_JSON).await;
    mount(&server, "/rss", 503, "down").await;

    let config = config_for(&server);
    let client = build_client().unwrap();
    let market = MarketClient::new(client.clone(), &config.api_base_url, None);

    let board = snapshot::load(&config, &market, &client).await;
    assert!(board.coins.is_err());
    assert!(board.global.is_ok());
    assert!(board.news.is_empty());

    let text = snapshot::render_text(&board, 5, Utc::now());
    assert!(text.contains("Markets unavailable"));
    assert!(text.contains("BTC Dominance   52.30%"));
    assert!(text.contains("No news available"));
}
