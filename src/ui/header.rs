use crate::app::App;
use crate::market::format::{compact_usd, pct, Tone, MISSING};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title row plus a summary line with asset count and refresh window.
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    let p = &app.palette;

    let updated = app
        .markets_refresh
        .loaded_at
        .map(|t| {
            t.with_timezone(&chrono::Local)
                .format("updated %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "loading...".to_string());

    let left = Paragraph::new(vec![
        Line::from(Span::styled("COINBOARD // CRYPTO", p.title)),
        Line::from(Span::styled(
            format!(
                "{} assets · refresh {}s · {}",
                app.coins.len(),
                app.config.markets_refresh().as_secs(),
                updated
            ),
            p.label,
        )),
    ]);
    let right = Paragraph::new(Line::from(Span::styled("MARKET BOARD", p.title)))
        .alignment(Alignment::Right);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);
    f.render_widget(left, halves[0]);
    f.render_widget(right, halves[1]);
}

/// The four global stat cards.
pub fn render_stat_cards(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.global.as_ref().map(|g| &g.data);
    let change = stats.and_then(|s| s.market_cap_change_percentage_24h_usd);
    let btc_dominance = stats
        .and_then(|s| s.market_cap_percentage.btc)
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| MISSING.to_string());

    let cards = [
        (
            "Total Mkt Cap",
            compact_usd(stats.and_then(|s| s.total_market_cap.usd)),
            Tone::Unknown,
        ),
        (
            "24h Volume",
            compact_usd(stats.and_then(|s| s.total_volume.usd)),
            Tone::Unknown,
        ),
        ("BTC Dominance", btc_dominance, Tone::Unknown),
        ("Mkt Cap 24h", pct(change), Tone::of(change)),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, tone), slot) in cards.into_iter().zip(slots.iter()) {
        // Only the change card is colored by direction
        let value_style = match tone {
            Tone::Unknown => app.palette.value,
            tone => app.palette.tone(tone),
        };
        let card = Paragraph::new(vec![
            Line::from(Span::styled(label, app.palette.label)),
            Line::from(Span::styled(value, value_style)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.panel_border),
        );
        f.render_widget(card, *slot);
    }
}
