use serde::Deserialize;
use std::fs;

/// Symbols screened when config.json does not override the watch list.
pub const DEFAULT_WATCH_LIST: [&str; 30] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META", "BRK.B", "JPM",
    "V", "JNJ", "UNH", "WMT", "PG", "MA", "HD", "DIS", "PYPL", "BAC", "VZ",
    "CMCSA", "ADBE", "NFLX", "KO", "NKE", "MRK", "PEP", "PFE", "INTC", "CSCO",
];

/// Setup phase compares close[i] against close[i - SETUP_LAG].
pub const SETUP_LAG: usize = 4;
/// Countdown phase compares close[i] against close[i - COUNTDOWN_LAG].
pub const COUNTDOWN_LAG: usize = 2;
/// Consecutive qualifying days required to complete a setup.
pub const SETUP_TARGET: u32 = 9;
/// Qualifying days (not necessarily consecutive) required to complete a countdown.
pub const COUNTDOWN_TARGET: u32 = 13;

/// Trailing window and fixed divisor of the momentum oscillator.
pub const OSCILLATOR_PERIOD: usize = 14;
pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;
pub const OVERSOLD_THRESHOLD: f64 = 30.0;

pub const SHORT_SMA_PERIOD: usize = 50;
pub const LONG_SMA_PERIOD: usize = 200;

/// Minimum valid closes needed before a single-symbol analysis is meaningful.
pub const MIN_ANALYSIS_CLOSES: usize = 22;
/// Ranked picks returned per pass.
pub const TOP_PICKS: usize = 10;

pub const FETCH_ATTEMPTS: usize = 4;
pub const FETCH_TIMEOUT_SECS: u64 = 10;
/// Fixed delay between fetch attempts, no backoff growth.
pub const RETRY_DELAY_SECS: u64 = 2;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_watch_list")]
    pub watch_list: Vec<String>,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// Optional symbol given a full single-symbol analysis each pass.
    #[serde(default)]
    pub spotlight_symbol: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            watch_list: default_watch_list(),
            refresh_interval_seconds: default_refresh_interval(),
            spotlight_symbol: None,
        }
    }
}

fn default_watch_list() -> Vec<String> {
    DEFAULT_WATCH_LIST.iter().map(|s| s.to_string()).collect()
}

fn default_refresh_interval() -> u64 {
    300
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.watch_list.len(), 30);
        assert_eq!(config.refresh_interval_seconds, 300);
        assert!(config.spotlight_symbol.is_none());
    }

    #[test]
    fn explicit_watch_list_overrides_default() {
        let config: AppConfig =
            serde_json::from_str(r#"{"watch_list": ["TSLA"], "spotlight_symbol": "aapl"}"#)
                .unwrap();
        assert_eq!(config.watch_list, vec!["TSLA".to_string()]);
        assert_eq!(config.spotlight_symbol.as_deref(), Some("aapl"));
    }
}
