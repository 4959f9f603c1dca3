//! Helper functions for UI operations.
//!
//! Background refresh spawning and panic capture shared by the event loop
//! and the input handlers.

use crate::app::{App, AppEvent, Source};
use crate::feed::load_news;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// Instead of the task silently disappearing (caught by Tokio's runtime but
/// not handled), panics are converted to `Err(String)` containing the panic
/// message so the dashboard can report them.
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            }
        })
}

/// Start fetches for every source whose refresh window has elapsed.
pub(super) fn spawn_due_refreshes(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let now = tokio::time::Instant::now();
    for source in app.due_sources(now) {
        spawn_refresh(app, source, event_tx);
        app.needs_redraw = true;
    }
}

/// Spawn a background fetch for one source.
///
/// Marks the source in flight; the matching `AppEvent` (or `TaskPanicked`)
/// clears it again.
pub(super) fn spawn_refresh(app: &mut App, source: Source, event_tx: &mpsc::Sender<AppEvent>) {
    let state = app.refresh_state_mut(source);
    state.in_flight = true;
    state.requested_at = Some(tokio::time::Instant::now());

    let tx = event_tx.clone();
    tracing::debug!(source = source.name(), "Spawning refresh task");

    match source {
        Source::Markets => {
            let market = app.market.clone();
            let vs_currency = app.config.vs_currency.clone();
            let per_page = app.config.per_page;
            spawn_guarded(source, tx, async move {
                let result = market.coins(&vs_currency, per_page).await;
                AppEvent::CoinsLoaded(result.map_err(|e| e.to_string()))
            });
        }
        Source::Global => {
            let market = app.market.clone();
            spawn_guarded(source, tx, async move {
                AppEvent::GlobalLoaded(market.global().await.map_err(|e| e.to_string()))
            });
        }
        Source::News => {
            let http = app.http.clone();
            let url = app.config.news_feed_url.clone();
            let max_items = app.config.max_news_items;
            spawn_guarded(source, tx, async move {
                AppEvent::NewsLoaded(load_news(&http, &url, max_items).await)
            });
        }
    }
}

/// Run `work` on the runtime and forward its event, converting a panic into
/// `AppEvent::TaskPanicked`.
fn spawn_guarded<F>(source: Source, tx: mpsc::Sender<AppEvent>, work: F)
where
    F: std::future::Future<Output = AppEvent> + Send + 'static,
{
    tokio::spawn(async move {
        let event = match catch_task_panic(work).await {
            Ok(event) => event,
            Err(panic_msg) => {
                tracing::error!(task = source.name(), error = %panic_msg, "Background task panicked");
                AppEvent::TaskPanicked {
                    source,
                    error: panic_msg,
                }
            }
        };
        if tx.send(event).await.is_err() {
            tracing::warn!(task = source.name(), "Channel send failed (receiver dropped)");
        }
    });
}

/// Format a timestamp relative to `now`: `5m`, `3h`, `2d`, then `Mar 04`.
pub(super) fn format_relative_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return String::new();
    };

    let diff = (now - ts).num_seconds();

    // Future dates (malformed feeds)
    if diff < 0 {
        return "now".to_string();
    }
    if diff < 3600 {
        return format!("{}m", diff / 60);
    }
    if diff < 86400 {
        return format!("{}h", diff / 3600);
    }
    if diff < 604800 {
        return format!("{}d", diff / 86400);
    }
    ts.format("%b %d").to_string()
}
