// Single-symbol analysis: exhaustion signals, momentum oscillator and the
// 50/200 SMA crossover over a six-month series.
use crate::analyzer::series_math::{
    classify_momentum, classify_trend, momentum_oscillator, sma, MomentumLabel, TrendLabel,
};
use crate::analyzer::td_sequential::{detect, SignalEvent};
use crate::config::{LONG_SMA_PERIOD, MIN_ANALYSIS_CLOSES, SHORT_SMA_PERIOD};
use crate::model::{AnalyzeError, Range};
use crate::quote::QuoteSource;

use tracing::info;

#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub symbol: String,
    pub signals: Vec<SignalEvent>,
    pub oscillator: f64,
    pub momentum: MomentumLabel,
    pub short_sma: f64,
    pub long_sma: f64,
    pub trend: TrendLabel,
}

/// Fetches the long-range series for one symbol and derives the full report.
/// Fails with a typed, user-presentable condition; never panics the host.
pub async fn analyze_symbol(
    source: &dyn QuoteSource,
    symbol: &str,
) -> Result<SymbolReport, AnalyzeError> {
    let series = source.fetch_series(symbol, Range::Long).await?;
    let closes = series.valid_closes();
    if closes.len() < MIN_ANALYSIS_CLOSES {
        return Err(AnalyzeError::InsufficientHistory(closes.len()));
    }

    let signals = detect(&closes);
    info!("{}: {} exhaustion signals over {} closes", symbol, signals.len(), closes.len());

    let oscillator = momentum_oscillator(&closes);
    let momentum = classify_momentum(oscillator);

    // The 22-close guard above keeps both windows non-empty.
    let short_sma = sma(&closes, SHORT_SMA_PERIOD)
        .ok_or_else(|| AnalyzeError::InsufficientHistory(closes.len()))?;
    let long_sma = sma(&closes, LONG_SMA_PERIOD)
        .ok_or_else(|| AnalyzeError::InsufficientHistory(closes.len()))?;
    let trend = classify_trend(short_sma, long_sma);

    Ok(SymbolReport {
        symbol: symbol.to_string(),
        signals,
        oscillator,
        momentum,
        short_sma,
        long_sma,
        trend,
    })
}
