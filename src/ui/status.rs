use crate::app::{App, Source};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

const HINTS: &str = "[j/k] move  [Tab] switch panel  [Enter/o] open link  [r] refresh  [t] theme  [q] quit";

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let loading: Vec<&str> = Source::ALL
        .into_iter()
        .filter(|&s| app.refresh_state(s).in_flight)
        .map(Source::name)
        .collect();

    let (text, style): (Cow<'_, str>, _) = if let Some((msg, _, is_error)) = &app.status_message {
        let style = if *is_error {
            app.palette.status_error
        } else {
            app.palette.status_bar
        };
        (Cow::Borrowed(msg.as_str()), style)
    } else if !loading.is_empty() {
        (
            Cow::Owned(format!("Loading {}...", loading.join(", "))),
            app.palette.status_bar,
        )
    } else {
        (Cow::Borrowed(HINTS), app.palette.status_bar)
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
