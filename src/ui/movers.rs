use crate::app::App;
use crate::market::format::{pct, usd_opt, Tone};
use crate::market::{top_gainers, top_losers, Coin};
use crate::util::{pad_left, pad_right, strip_control_chars, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Gainers and losers cards, side by side.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let n = app.config.mover_count;
    render_card(f, app, halves[0], " Top Gainers 24h ", &top_gainers(&app.coins, n));
    render_card(f, app, halves[1], " Top Losers 24h ", &top_losers(&app.coins, n));
}

fn render_card(f: &mut Frame, app: &App, area: Rect, title: &str, coins: &[&Coin]) {
    let p = &app.palette;
    // Borders take two columns; the rest is ticker | name | price | change
    let inner = area.width.saturating_sub(2) as usize;
    let name_width = inner.saturating_sub(6 + 14 + 9 + 3);

    let lines: Vec<Line> = if coins.is_empty() {
        vec![Line::from(Span::styled("No data", p.placeholder))]
    } else {
        coins
            .iter()
            .map(|coin| {
                let change = coin.price_change_percentage_24h;
                let ticker = coin.ticker();
                let name = strip_control_chars(&coin.name);
                Line::from(vec![
                    Span::styled(pad_right(&truncate_to_width(&ticker, 6), 6), p.value),
                    Span::raw(" "),
                    Span::styled(
                        pad_right(&truncate_to_width(&name, name_width), name_width),
                        p.asset_name,
                    ),
                    Span::raw(" "),
                    Span::styled(pad_left(&usd_opt(coin.current_price), 14), p.value),
                    Span::raw(" "),
                    Span::styled(pad_left(&pct(change), 9), p.tone(Tone::of(change))),
                ])
            })
            .collect()
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(p.panel_border)
            .title(Span::styled(title, p.label)),
    );
    f.render_widget(card, area);
}
