use crate::app::{App, Focus};
use crate::market::format::{compact, compact_usd, pct, usd_opt, Tone, MISSING};
use crate::market::Coin;
use crate::util::{strip_control_chars, truncate_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Longest asset name shown before truncation.
const NAME_WIDTH: usize = 18;

const WIDTHS: [Constraint; 9] = [
    Constraint::Length(4),
    Constraint::Min(12),
    Constraint::Length(14),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(9),
];

/// Render the market table.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let is_focused = app.focus == Focus::Markets;

    let header = Row::new(
        ["#", "Asset", "Price", "1h", "24h", "7d", "Mkt Cap", "Vol 24h", "Supply"]
            .into_iter()
            .enumerate()
            .map(|(i, h)| right_aligned_if(i >= 2, Span::raw(h))),
    )
    .style(p.table_header);

    let rows: Vec<Row> = app
        .coins
        .iter()
        .map(|coin| market_row(app, coin))
        .collect();

    let border_style = if is_focused {
        p.panel_border_focused
    } else {
        p.panel_border
    };

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .row_highlight_style(p.row_selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Markets "),
        );

    let mut state = TableState::default();
    if !app.coins.is_empty() {
        state.select(Some(app.selected_coin));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn market_row<'a>(app: &App, coin: &'a Coin) -> Row<'a> {
    let p = &app.palette;
    let rank = coin
        .market_cap_rank
        .map_or_else(|| MISSING.to_string(), |r| r.to_string());
    let name = strip_control_chars(&coin.name);
    let asset = Line::from(vec![
        Span::styled(
            truncate_to_width(&name, NAME_WIDTH).into_owned(),
            p.value,
        ),
        Span::raw(" "),
        Span::styled(coin.ticker(), p.asset_name),
    ]);
    let supply = coin
        .circulating_supply
        .filter(|v| v.is_finite())
        .map_or_else(|| MISSING.to_string(), compact);

    let change = |v: Option<f64>| Span::styled(pct(v), p.tone(Tone::of(v)));

    Row::new(vec![
        Cell::from(Span::styled(rank, p.rank)),
        Cell::from(asset),
        right_aligned(Span::styled(usd_opt(coin.current_price), p.value)),
        right_aligned(change(coin.price_change_percentage_1h_in_currency)),
        right_aligned(change(coin.price_change_percentage_24h)),
        right_aligned(change(coin.price_change_percentage_7d_in_currency)),
        right_aligned(Span::styled(compact_usd(coin.market_cap), p.value)),
        right_aligned(Span::styled(compact_usd(coin.total_volume), p.value)),
        right_aligned(Span::styled(supply, p.asset_name)),
    ])
}

fn right_aligned(span: Span<'_>) -> Cell<'_> {
    Cell::from(Line::from(span).alignment(Alignment::Right))
}

fn right_aligned_if(right: bool, span: Span<'_>) -> Cell<'_> {
    if right {
        right_aligned(span)
    } else {
        Cell::from(span)
    }
}
