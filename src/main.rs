use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;
use tokio::sync::mpsc;

use coinboard::app::{App, AppEvent};
use coinboard::config::Config;
use coinboard::market::MarketClient;
use coinboard::{http, snapshot, ui};

#[derive(Parser, Debug)]
#[command(
    name = "coinboard",
    version,
    about = "Terminal crypto market board with top movers and news"
)]
struct Args {
    /// Config file (default: ~/.config/coinboard/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fetch everything once, print a plain-text board and exit
    #[arg(long)]
    snapshot: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the TUI, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path().context("Failed to locate config file")?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::debug!(config = ?config, "Effective configuration");

    let client = http::build_client().context("Failed to build HTTP client")?;

    if args.snapshot {
        let market = MarketClient::new(
            client.clone(),
            &config.api_base_url,
            config.api_key().map(SecretString::from),
        );
        let board = snapshot::load(&config, &market, &client).await;
        print!(
            "{}",
            snapshot::render_text(&board, config.mover_count, Utc::now())
        );
        return Ok(());
    }

    let mut app = App::new(config, client);

    // One event per fetch; three sources, so a small buffer suffices
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
