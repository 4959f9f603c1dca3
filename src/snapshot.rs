//! One-shot plain-text rendition of the board for `--snapshot`.
//!
//! Fetches every source once, concurrently, and formats the result for a
//! pipe or a log file instead of the terminal UI.

use crate::config::Config;
use crate::feed::{load_news, FeedItem};
use crate::market::format::{compact, compact_usd, pct, usd_opt, MISSING};
use crate::market::{top_gainers, top_losers, Coin, GlobalData, MarketClient, MarketError};
use crate::util::{pad_left, pad_right, strip_control_chars, truncate_to_width};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Everything the board shows, as fetched.
pub struct Board {
    pub coins: Result<Vec<Coin>, MarketError>,
    pub global: Result<GlobalData, MarketError>,
    pub news: Vec<FeedItem>,
}

/// Fetch all three sources concurrently. A failing source never prevents
/// the others from loading.
pub async fn load(config: &Config, market: &MarketClient, http: &reqwest::Client) -> Board {
    let (coins, global, news) = tokio::join!(
        market.coins(&config.vs_currency, config.per_page),
        market.global(),
        load_news(http, &config.news_feed_url, config.max_news_items),
    );

    if let Err(e) = &coins {
        tracing::warn!(error = %e, "Market listing unavailable for snapshot");
    }
    if let Err(e) = &global {
        tracing::warn!(error = %e, "Global stats unavailable for snapshot");
    }

    Board {
        coins,
        global,
        news,
    }
}

/// Format the board as plain text.
pub fn render_text(board: &Board, mover_count: usize, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_board(&mut out, board, mover_count, now);
    out
}

fn write_board(
    out: &mut String,
    board: &Board,
    mover_count: usize,
    now: DateTime<Utc>,
) -> std::fmt::Result {
    writeln!(out, "COINBOARD // CRYPTO    MARKET BOARD")?;
    writeln!(out, "{}", now.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out)?;

    match &board.global {
        Ok(global) => {
            let s = &global.data;
            let dominance = s
                .market_cap_percentage
                .btc
                .filter(|v| v.is_finite())
                .map_or_else(|| MISSING.to_string(), |v| format!("{:.2}%", v));
            writeln!(out, "Total Mkt Cap   {}", compact_usd(s.total_market_cap.usd))?;
            writeln!(out, "24h Volume      {}", compact_usd(s.total_volume.usd))?;
            writeln!(out, "BTC Dominance   {}", dominance)?;
            writeln!(
                out,
                "Mkt Cap 24h     {}",
                pct(s.market_cap_change_percentage_24h_usd)
            )?;
        }
        Err(e) => writeln!(out, "Global stats unavailable: {}", e)?,
    }
    writeln!(out)?;

    match &board.coins {
        Ok(coins) => {
            write_movers(out, "Top Gainers 24h", &top_gainers(coins, mover_count))?;
            write_movers(out, "Top Losers 24h", &top_losers(coins, mover_count))?;
            write_table(out, coins)?;
        }
        Err(e) => writeln!(out, "Markets unavailable: {}", e)?,
    }
    writeln!(out)?;

    writeln!(out, "News")?;
    if board.news.is_empty() {
        writeln!(out, "  No news available")?;
    }
    for item in &board.news {
        let title = strip_control_chars(&item.title);
        let date = match item.published_at() {
            Some(d) => d.format("%Y-%m-%d %H:%M").to_string(),
            None => strip_control_chars(item.published.trim()).into_owned(),
        };
        writeln!(out, "  {}  {}", pad_right(&truncate_to_width(&title, 80), 80), date)?;
        writeln!(out, "    {}", strip_control_chars(&item.link))?;
    }
    Ok(())
}

fn write_movers(out: &mut String, title: &str, coins: &[&Coin]) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    for coin in coins {
        writeln!(
            out,
            "  {} {} {}",
            pad_right(&coin.ticker(), 8),
            pad_left(&usd_opt(coin.current_price), 14),
            pad_left(&pct(coin.price_change_percentage_24h), 9),
        )?;
    }
    writeln!(out)
}

fn write_table(out: &mut String, coins: &[Coin]) -> std::fmt::Result {
    writeln!(
        out,
        "{} {} {} {} {} {} {} {} {}",
        pad_left("#", 4),
        pad_right("Asset", 24),
        pad_left("Price", 14),
        pad_left("1h", 8),
        pad_left("24h", 8),
        pad_left("7d", 8),
        pad_left("Mkt Cap", 9),
        pad_left("Vol 24h", 9),
        pad_left("Supply", 9),
    )?;
    for coin in coins {
        let rank = coin
            .market_cap_rank
            .map_or_else(|| MISSING.to_string(), |r| r.to_string());
        let asset = format!("{} {}", strip_control_chars(&coin.name), coin.ticker());
        let supply = coin
            .circulating_supply
            .filter(|v| v.is_finite())
            .map_or_else(|| MISSING.to_string(), compact);
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            pad_left(&rank, 4),
            pad_right(&truncate_to_width(&asset, 24), 24),
            pad_left(&usd_opt(coin.current_price), 14),
            pad_left(&pct(coin.price_change_percentage_1h_in_currency), 8),
            pad_left(&pct(coin.price_change_percentage_24h), 8),
            pad_left(&pct(coin.price_change_percentage_7d_in_currency), 8),
            pad_left(&compact_usd(coin.market_cap), 9),
            pad_left(&compact_usd(coin.total_volume), 9),
            pad_left(&supply, 9),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchError;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    fn coin(id: &str, change: f64) -> Coin {
        Coin {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_uppercase(),
            current_price: Some(100.0),
            market_cap_rank: Some(1),
            price_change_percentage_24h: Some(change),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_full_board() {
        let board = Board {
            coins: Ok(vec![coin("sol", 8.0), coin("xrp", -4.5)]),
            global: Ok(GlobalData::default()),
            news: vec![FeedItem {
                title: "Solana rallies".to_string(),
                link: "https://example.com/sol".to_string(),
                published: "Wed, 20 Mar 2024 10:00:00 GMT".to_string(),
            }],
        };

        let text = render_text(&board, 5, now());
        assert!(text.starts_with("COINBOARD // CRYPTO"));
        assert!(text.contains("Total Mkt Cap   —"));
        assert!(text.contains("Top Gainers 24h\n  SOL"));
        assert!(text.contains("Top Losers 24h\n  XRP"));
        assert!(text.contains("+8.00%"));
        assert!(text.contains("Solana rallies"));
        assert!(text.contains("2024-03-20 10:00"));
        assert!(!text.contains("No news available"));
    }

    #[test]
    fn test_render_keeps_unparseable_date() {
        let board = Board {
            coins: Ok(Vec::new()),
            global: Ok(GlobalData::default()),
            news: vec![FeedItem {
                title: "Halving recap".to_string(),
                link: "https://example.com/halving".to_string(),
                published: "20/03/2024 10h00".to_string(),
            }],
        };

        let text = render_text(&board, 5, now());
        assert!(text.contains("Halving recap"));
        assert!(text.contains("20/03/2024 10h00"));
    }

    #[test]
    fn test_render_degraded_board() {
        let board = Board {
            coins: Err(MarketError::Fetch(FetchError::HttpStatus(429))),
            global: Err(MarketError::Fetch(FetchError::HttpStatus(500))),
            news: Vec::new(),
        };

        let text = render_text(&board, 5, now());
        assert!(text.contains("Markets unavailable: HTTP error: status 429"));
        assert!(text.contains("Global stats unavailable"));
        assert!(text.contains("No news available"));
    }
}
