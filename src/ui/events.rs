//! Application event handling.
//!
//! Applies the results of background fetches to the dashboard state.

use crate::app::{App, AppEvent, Source};
use chrono::Utc;

pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CoinsLoaded(result) => {
            let state = app.refresh_state_mut(Source::Markets);
            state.in_flight = false;
            match result {
                Ok(coins) => {
                    state.loaded_at = Some(Utc::now());
                    tracing::debug!(count = coins.len(), "Market listing updated");
                    app.set_coins(coins);
                }
                // Keep the previous listing on screen
                Err(e) => {
                    tracing::warn!(error = %e, "Market listing refresh failed");
                    app.set_error(format!("Markets: {}", e));
                }
            }
        }
        AppEvent::GlobalLoaded(result) => {
            let state = app.refresh_state_mut(Source::Global);
            state.in_flight = false;
            match result {
                Ok(global) => {
                    state.loaded_at = Some(Utc::now());
                    app.global = Some(global);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Global stats refresh failed");
                    app.set_error(format!("Global stats: {}", e));
                }
            }
        }
        AppEvent::NewsLoaded(items) => {
            let state = app.refresh_state_mut(Source::News);
            state.in_flight = false;
            state.loaded_at = Some(Utc::now());
            app.set_news(items);
        }
        AppEvent::TaskPanicked { source, error } => {
            app.refresh_state_mut(source).in_flight = false;
            tracing::error!(task = source.name(), error, "Background task panicked");
            app.set_error(format!("Internal error in {} task", source.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::FeedItem;
    use crate::market::{Coin, GlobalData};

    fn test_app() -> App {
        App::new(Config::default(), reqwest::Client::new())
    }

    fn coin(id: &str) -> Coin {
        Coin {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_coins_loaded_replaces_listing() {
        let mut app = test_app();
        app.markets_refresh.in_flight = true;

        handle_app_event(&mut app, AppEvent::CoinsLoaded(Ok(vec![coin("btc")])));

        assert_eq!(app.coins.len(), 1);
        assert!(!app.markets_refresh.in_flight);
        assert!(app.markets_refresh.loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_coins_failure_keeps_stale_listing() {
        let mut app = test_app();
        app.set_coins(vec![coin("btc"), coin("eth")]);
        app.markets_refresh.in_flight = true;

        handle_app_event(
            &mut app,
            AppEvent::CoinsLoaded(Err("HTTP 429".to_string())),
        );

        assert_eq!(app.coins.len(), 2);
        assert!(!app.markets_refresh.in_flight);
        let (msg, _, is_error) = app.status_message.clone().unwrap();
        assert_eq!(msg, "Markets: HTTP 429");
        assert!(is_error);
    }

    #[tokio::test]
    async fn test_global_loaded() {
        let mut app = test_app();
        handle_app_event(&mut app, AppEvent::GlobalLoaded(Ok(GlobalData::default())));
        assert!(app.global.is_some());
        assert!(app.global_refresh.loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_news_loaded_empty_clears_list() {
        let mut app = test_app();
        app.set_news(vec![FeedItem {
            title: "Old".to_string(),
            link: "https://example.com/old".to_string(),
            published: String::new(),
        }]);

        handle_app_event(&mut app, AppEvent::NewsLoaded(Vec::new()));
        assert!(app.news.is_empty());
    }

    #[tokio::test]
    async fn test_task_panicked_reports_and_clears_flight() {
        let mut app = test_app();
        app.news_refresh.in_flight = true;

        handle_app_event(
            &mut app,
            AppEvent::TaskPanicked {
                source: Source::News,
                error: "boom".to_string(),
            },
        );

        assert!(!app.news_refresh.in_flight);
        let (msg, _, _) = app.status_message.clone().unwrap();
        assert_eq!(msg, "Internal error in news task");
    }
}
