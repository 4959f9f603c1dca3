use crate::app::{App, Focus};
use crate::feed::FeedItem;
use crate::util::{display_width, strip_control_chars, truncate_to_width};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::helpers::format_relative_time;

pub(super) const NO_NEWS: &str = "No news available";

/// Widest raw date shown when the feed's date cannot be parsed.
const RAW_DATE_WIDTH: usize = 16;

/// Render the news panel: one line per item, title then relative age.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let is_focused = app.focus == Focus::News;
    let now = Utc::now();

    // Borders and the highlight gutter
    let inner = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if app.news.is_empty() {
        vec![ListItem::new(Span::styled(NO_NEWS, p.placeholder))]
    } else {
        app.news
            .iter()
            .map(|item| {
                let age = date_label(item, now);
                let title = strip_control_chars(&item.title);
                let title_width = inner.saturating_sub(display_width(&age) + 1);
                let mut spans = vec![Span::styled(
                    truncate_to_width(&title, title_width).into_owned(),
                    p.news_title,
                )];
                if !age.is_empty() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(age, p.news_date));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let border_style = if is_focused {
        p.panel_border_focused
    } else {
        p.panel_border
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" News "),
        )
        .highlight_symbol("> ")
        .highlight_style(p.row_selected);

    let mut state = ListState::default();
    if is_focused && !app.news.is_empty() {
        state.select(Some(app.selected_news));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Relative age when the date parses, otherwise the feed's own text.
fn date_label(item: &FeedItem, now: DateTime<Utc>) -> String {
    match item.published_at() {
        Some(ts) => format_relative_time(Some(ts), now),
        None => {
            let raw = strip_control_chars(item.published.trim());
            truncate_to_width(&raw, RAW_DATE_WIDTH).into_owned()
        }
    }
}
