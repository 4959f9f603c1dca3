use crate::util::strip_control_chars;
use serde::Deserialize;

/// One row of the `/coins/markets` listing.
///
/// Numeric fields are optional: the API returns `null` for assets with no
/// recent trades or no supply data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
}

impl Coin {
    /// Ticker in upper case, as shown on the board.
    pub fn ticker(&self) -> String {
        strip_control_chars(&self.symbol).to_uppercase()
    }

    /// Hourly prices for the last 7 days, empty when not requested.
    pub fn sparkline(&self) -> &[f64] {
        self.sparkline_in_7d
            .as_ref()
            .map(|s| s.price.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// Response of `/global`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalData {
    pub data: GlobalStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlobalStats {
    pub total_market_cap: CurrencyAmounts,
    pub total_volume: CurrencyAmounts,
    pub market_cap_percentage: Dominance,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
}

/// Per-currency amounts; only USD is displayed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencyAmounts {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dominance {
    pub btc: Option<f64>,
    pub eth: Option<f64>,
}
