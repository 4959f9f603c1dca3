//! Keyboard input handling.

use crate::app::{App, AppEvent, Focus};
use crate::keybindings::Action as KbAction;
use crate::util::validate_url_for_open;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::spawn_due_refreshes;
use super::loop_runner::Action;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: isize = 10;

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    match app.keybindings.action_for_key(code, modifiers) {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.move_selection(1),
        Some(KbAction::NavUp) => app.move_selection(-1),
        Some(KbAction::PageDown) => app.move_selection(PAGE_SIZE),
        Some(KbAction::PageUp) => app.move_selection(-PAGE_SIZE),
        Some(KbAction::CycleFocus) => app.toggle_focus(),
        Some(KbAction::OpenLink) => open_selected_link(app),
        Some(KbAction::Refresh) => {
            app.force_refresh();
            spawn_due_refreshes(app, event_tx);
            app.set_status("Refreshing...");
        }
        Some(KbAction::CycleTheme) => app.cycle_theme(),
        None => {}
    }
    Action::Continue
}

/// Open the selected news link in the browser.
///
/// Only http(s) links are handed to the OS opener; feed-provided links are
/// untrusted.
fn open_selected_link(app: &mut App) {
    if app.focus != Focus::News {
        app.set_status("Switch to the news panel (Tab) to open a link");
        return;
    }
    let Some(item) = app.selected_news() else {
        app.set_status("No news item selected");
        return;
    };

    match validate_url_for_open(&item.link) {
        Err(e) => {
            tracing::warn!(link = %item.link, error = %e, "Refusing to open news link");
            app.set_error(e.to_string());
        }
        Ok(url) => {
            if let Err(e) = open::that(url.as_str()) {
                app.set_error(format!("Failed to open browser: {}", e));
            } else {
                app.set_status("Opened in browser");
            }
        }
    }
}
