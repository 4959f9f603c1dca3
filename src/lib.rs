//! Terminal crypto market board: CoinGecko listings, top movers, a 7-day
//! price chart and a news panel fed by an RSS-like feed.

pub mod app;
pub mod config;
pub mod feed;
pub mod http;
pub mod keybindings;
pub mod market;
pub mod snapshot;
pub mod theme;
pub mod ui;
pub mod util;
