use crate::app::App;
use crate::market::format::{pct, usd, Tone};
use crate::market::trend::{bounds, change_pct, trend_points};
use crate::util::strip_control_chars;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Render the 7-day price chart for the selected coin.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;

    let Some(coin) = app.selected_coin() else {
        render_placeholder(f, app, area, " 7d Trend ", "Waiting for market data");
        return;
    };

    let points = trend_points(coin.sparkline(), Utc::now());
    let title = format!(" {} · 7d ", strip_control_chars(&coin.name));
    let Some((low, high)) = bounds(&points) else {
        render_placeholder(f, app, area, &title, "No price history");
        return;
    };

    // x is hours from the first sample
    let start = points[0].time;
    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|pt| ((pt.time - start).num_minutes() as f64 / 60.0, pt.price))
        .collect();
    let span_hours = data.last().map_or(1.0, |(x, _)| x.max(1.0));

    let change = change_pct(&points);
    let block_title = Line::from(vec![
        Span::styled(title, p.label),
        Span::styled(format!("{} ", pct(change)), p.tone(Tone::of(change))),
    ]);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(p.chart_line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(p.panel_border)
                .title(block_title),
        )
        .x_axis(
            Axis::default()
                .style(p.label)
                .bounds([0.0, span_hours])
                .labels(["7d ago", "now"]),
        )
        .y_axis(
            Axis::default()
                .style(p.label)
                .bounds([low, high])
                .labels([usd(low), usd(high)]),
        );

    f.render_widget(chart, area);
}

fn render_placeholder(f: &mut Frame, app: &App, area: Rect, title: &str, msg: &str) {
    let paragraph = Paragraph::new(Span::styled(msg, app.palette.placeholder)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border)
            .title(Span::styled(title, app.palette.label)),
    );
    f.render_widget(paragraph, area);
}
