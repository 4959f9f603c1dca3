use crate::config::Config;
use crate::feed::FeedItem;
use crate::keybindings::KeybindingRegistry;
use crate::market::{Coin, GlobalData, MarketClient};
use crate::theme::{ColorPalette, ThemeVariant};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use std::time::Duration;
use tokio::time::Instant;

/// How long a status message stays in the status bar.
const STATUS_TTL: Duration = Duration::from_secs(5);

// ============================================================================
// Focus and Sources
// ============================================================================

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Markets,
    News,
}

/// An independently refreshed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Markets,
    Global,
    News,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Markets, Source::Global, Source::News];

    pub fn name(self) -> &'static str {
        match self {
            Source::Markets => "markets",
            Source::Global => "global",
            Source::News => "news",
        }
    }
}

/// Refresh bookkeeping for one source.
#[derive(Debug, Default, Clone)]
pub struct RefreshState {
    /// When the last fetch was started.
    pub requested_at: Option<Instant>,
    /// A fetch is running; no second one is started until it reports back.
    pub in_flight: bool,
    /// Wall-clock time of the last successful load.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl RefreshState {
    fn is_due(&self, now: Instant, window: Duration) -> bool {
        if self.in_flight {
            return false;
        }
        match self.requested_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= window,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Events from background tasks
pub enum AppEvent {
    CoinsLoaded(Result<Vec<Coin>, String>),
    GlobalLoaded(Result<GlobalData, String>),
    /// News failures are already degraded to an empty list by the fetcher.
    NewsLoaded(Vec<FeedItem>),
    /// A background task panicked.
    TaskPanicked {
        source: Source,
        error: String,
    },
}

// ============================================================================
// App State
// ============================================================================

pub struct App {
    pub config: Config,
    pub http: reqwest::Client,
    pub market: MarketClient,
    pub theme: ThemeVariant,
    pub palette: ColorPalette,
    pub keybindings: KeybindingRegistry,

    pub coins: Vec<Coin>,
    pub global: Option<GlobalData>,
    pub news: Vec<FeedItem>,

    pub focus: Focus,
    pub selected_coin: usize,
    pub selected_news: usize,

    pub markets_refresh: RefreshState,
    pub global_refresh: RefreshState,
    pub news_refresh: RefreshState,

    /// Status bar message, its expiry, and whether it reports an error.
    pub status_message: Option<(String, Instant, bool)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let theme = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeVariant::Dark
        });
        let market = MarketClient::new(
            http.clone(),
            &config.api_base_url,
            config.api_key().map(SecretString::from),
        );

        Self {
            config,
            http,
            market,
            theme,
            palette: theme.palette(),
            keybindings: KeybindingRegistry::new(),
            coins: Vec::new(),
            global: None,
            news: Vec::new(),
            focus: Focus::Markets,
            selected_coin: 0,
            selected_news: 0,
            markets_refresh: RefreshState::default(),
            global_refresh: RefreshState::default(),
            news_refresh: RefreshState::default(),
            status_message: None,
            needs_redraw: true,
        }
    }

    pub fn refresh_state(&self, source: Source) -> &RefreshState {
        match source {
            Source::Markets => &self.markets_refresh,
            Source::Global => &self.global_refresh,
            Source::News => &self.news_refresh,
        }
    }

    pub fn refresh_state_mut(&mut self, source: Source) -> &mut RefreshState {
        match source {
            Source::Markets => &mut self.markets_refresh,
            Source::Global => &mut self.global_refresh,
            Source::News => &mut self.news_refresh,
        }
    }

    pub fn refresh_window(&self, source: Source) -> Duration {
        match source {
            Source::Markets => self.config.markets_refresh(),
            Source::Global => self.config.global_refresh(),
            Source::News => self.config.news_refresh(),
        }
    }

    /// Sources whose refresh window has elapsed and that have no fetch running.
    pub fn due_sources(&self, now: Instant) -> Vec<Source> {
        Source::ALL
            .into_iter()
            .filter(|&s| self.refresh_state(s).is_due(now, self.refresh_window(s)))
            .collect()
    }

    /// Forget all refresh timestamps so the next tick fetches everything.
    pub fn force_refresh(&mut self) {
        for source in Source::ALL {
            self.refresh_state_mut(source).requested_at = None;
        }
    }

    pub fn selected_coin(&self) -> Option<&Coin> {
        self.coins.get(self.selected_coin)
    }

    pub fn selected_news(&self) -> Option<&FeedItem> {
        self.news.get(self.selected_news)
    }

    /// Move the selection in the focused panel by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let (selected, len) = match self.focus {
            Focus::Markets => (&mut self.selected_coin, self.coins.len()),
            Focus::News => (&mut self.selected_news, self.news.len()),
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        *selected = selected.saturating_add_signed(delta).min(len - 1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Markets => Focus::News,
            Focus::News => Focus::Markets,
        };
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.palette = self.theme.palette();
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    /// Replace the coin list, keeping the selection on the same coin if it
    /// is still listed.
    pub fn set_coins(&mut self, coins: Vec<Coin>) {
        let selected_id = self.selected_coin().map(|c| c.id.clone());
        self.coins = coins;
        self.selected_coin = selected_id
            .and_then(|id| self.coins.iter().position(|c| c.id == id))
            .unwrap_or(0);
    }

    pub fn set_news(&mut self, news: Vec<FeedItem>) {
        self.news = news;
        self.selected_news = self.selected_news.min(self.news.len().saturating_sub(1));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now() + STATUS_TTL, false));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now() + STATUS_TTL, true));
    }

    /// Drop an expired status message. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        match &self.status_message {
            Some((_, expires, _)) if Instant::now() >= *expires => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    async fn test_all_sources_due_initially() {
        let app = test_app();
        assert_eq!(app.due_sources(Instant::now()), Source::ALL.to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sources_follow_their_windows() {
        let mut app = test_app();
        let start = Instant::now();
        for source in Source::ALL {
            app.refresh_state_mut(source).requested_at = Some(start);
        }

        assert!(app.due_sources(start + Duration::from_secs(59)).is_empty());
        assert_eq!(
            app.due_sources(start + Duration::from_secs(60)),
            vec![Source::Markets]
        );
        assert_eq!(
            app.due_sources(start + Duration::from_secs(120)),
            vec![Source::Markets, Source::Global]
        );
        assert_eq!(
            app.due_sources(start + Duration::from_secs(300)),
            Source::ALL.to_vec()
        );
    }

    #[tokio::test]
    async fn test_in_flight_source_not_due() {
        let mut app = test_app();
        app.news_refresh.in_flight = true;
        assert_eq!(
            app.due_sources(Instant::now()),
            vec![Source::Markets, Source::Global]
        );
    }

    #[tokio::test]
    async fn test_force_refresh() {
        let mut app = test_app();
        let now = Instant::now();
        for source in Source::ALL {
            app.refresh_state_mut(source).requested_at = Some(now);
        }
        app.force_refresh();
        assert_eq!(app.due_sources(now).len(), 3);
    }

    #[tokio::test]
    async fn test_move_selection_clamps() {
        let mut app = test_app();
        app.move_selection(1);
        assert_eq!(app.selected_coin, 0);

        app.set_coins(vec![coin("btc"), coin("eth"), coin("sol")]);
        app.move_selection(5);
        assert_eq!(app.selected_coin, 2);
        app.move_selection(-10);
        assert_eq!(app.selected_coin, 0);
    }

    #[tokio::test]
    async fn test_set_coins_keeps_selected_coin() {
        let mut app = test_app();
        app.set_coins(vec![coin("btc"), coin("eth"), coin("sol")]);
        app.selected_coin = 1;

        app.set_coins(vec![coin("eth"), coin("btc")]);
        assert_eq!(app.selected_coin().map(|c| c.id.as_str()), Some("eth"));

        app.set_coins(vec![coin("doge")]);
        assert_eq!(app.selected_coin, 0);
    }

    #[tokio::test]
    async fn test_set_news_clamps_selection() {
        let mut app = test_app();
        app.selected_news = 4;
        app.set_news(Vec::new());
        assert_eq!(app.selected_news, 0);
        assert!(app.selected_news().is_none());
    }

    #[tokio::test]
    async fn test_unknown_theme_falls_back() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let app = App::new(config, reqwest::Client::new());
        assert_eq!(app.theme, ThemeVariant::Dark);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_expires() {
        let mut app = test_app();
        app.set_status("Refreshing");
        assert!(!app.clear_expired_status());

        tokio::time::advance(STATUS_TTL).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
