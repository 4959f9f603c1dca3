//! Market data from CoinGecko and the views derived from it.
//!
//! - [`client`] - HTTP client for `/coins/markets` and `/global`
//! - [`types`] - Response types
//! - [`movers`] - Top gainers and losers by 24h change
//! - [`format`] - Currency, compact and percentage formatting
//! - [`trend`] - Price trend points from the 7-day sparkline

mod client;
pub mod format;
mod movers;
pub mod trend;
mod types;

pub use client::{MarketClient, MarketError, DEFAULT_BASE_URL};
pub use movers::{top_gainers, top_losers, DEFAULT_MOVER_COUNT};
pub use types::{Coin, CurrencyAmounts, Dominance, GlobalData, GlobalStats, Sparkline};
