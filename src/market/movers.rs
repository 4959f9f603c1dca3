use crate::market::types::Coin;

/// Number of coins shown in each movers card.
pub const DEFAULT_MOVER_COUNT: usize = 5;

/// The `n` coins with the largest 24h gain, best first.
///
/// Coins without a 24h change are skipped. Equal changes keep listing order.
pub fn top_gainers(coins: &[Coin], n: usize) -> Vec<&Coin> {
    let mut ranked = with_change(coins);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(coin, _)| coin).collect()
}

/// The `n` coins with the largest 24h loss, worst first.
pub fn top_losers(coins: &[Coin], n: usize) -> Vec<&Coin> {
    let mut ranked = with_change(coins);
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().take(n).map(|(coin, _)| coin).collect()
}

fn with_change(coins: &[Coin]) -> Vec<(&Coin, f64)> {
    coins
        .iter()
        .filter_map(|c| {
            c.price_change_percentage_24h
                .filter(|v| v.is_finite())
                .map(|v| (c, v))
        })
        .collect()
}
