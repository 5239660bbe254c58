mod analyzer;
mod config;
mod model;
mod parser;
mod presenter;
mod quote;
mod utils;

use analyzer::{analyze_symbol, rank_picks, RankOutcome};
use config::{load_config, AppConfig};
use presenter::{format_picks, format_symbol_report, ConsoleSink, ResultSink, QUIET_MARKET_TEXT};
use quote::YahooFetcher;
use utils::normalize_symbol;

use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file, falling back to the built-in watch list
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error ({}), using defaults", e);
            AppConfig::default()
        }
    };

    if config.watch_list.is_empty() {
        error!("Watch list is empty, nothing to screen");
        return;
    }

    let fetcher = YahooFetcher::new();
    let sink = ConsoleSink;

    info!("🚀 TdSniper started, screening {} symbols", config.watch_list.len());

    // Main processing loop; the refresh schedule lives here, not in the core.
    loop {
        info!("Refreshing top picks...");
        match rank_picks(&fetcher, &config.watch_list).await {
            RankOutcome::Ranked(picks) => sink.present(&format_picks(&picks)),
            RankOutcome::QuietMarket => sink.present(QUIET_MARKET_TEXT),
        }

        if let Some(raw) = &config.spotlight_symbol {
            let symbol = normalize_symbol(raw);
            info!("Analyzing spotlight symbol {}...", symbol);
            match analyze_symbol(&fetcher, &symbol).await {
                Ok(report) => sink.present(&format_symbol_report(&report)),
                Err(e) => {
                    warn!("Spotlight analysis failed: {}", e);
                    sink.present(&e.to_string());
                }
            }
        }

        info!("Waiting {}s until next refresh...", config.refresh_interval_seconds);
        sleep(Duration::from_secs(config.refresh_interval_seconds)).await;
    }
}
