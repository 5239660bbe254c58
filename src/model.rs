// Core structs: QuoteSeries, InstrumentMetrics, error taxonomy
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::MIN_ANALYSIS_CLOSES;

/// Requested span of daily history, mapped to the provider's range strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// One session, enough for the live quote context.
    Short,
    /// One month, feeds average volume and the signal count.
    Medium,
    /// Six months, feeds the full single-symbol analysis.
    Long,
}

impl Range {
    pub fn as_str(self) -> &'static str {
        match self {
            Range::Short => "1d",
            Range::Medium => "1mo",
            Range::Long => "6mo",
        }
    }
}

/// Price references from the provider meta block, in fallback order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuoteMeta {
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub previous_close: Option<f64>,
}

/// One fetched daily series. Closes and volumes stay index-aligned; entries
/// the provider could not fill are `None`.
#[derive(Debug, Clone)]
pub struct QuoteSeries {
    pub closes: Vec<Option<f64>>,
    pub volumes: Vec<Option<f64>>,
    pub meta: QuoteMeta,
    pub fetched_at: DateTime<Utc>,
}

impl QuoteSeries {
    /// Closes with null/non-finite entries dropped. All day positions used by
    /// the analyzers are relative to this filtered sequence.
    pub fn valid_closes(&self) -> Vec<f64> {
        self.closes
            .iter()
            .flatten()
            .copied()
            .filter(|close| close.is_finite())
            .collect()
    }
}

/// Per-instrument values derived during one ranking pass. Never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentMetrics {
    pub symbol: String,
    pub percent_gain: f64,
    pub average_volume: f64,
    pub signal_count: usize,
    pub score: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("payload missing expected field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("quote feed unavailable after retries")]
    Unavailable,
    #[error(transparent)]
    Payload(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(
        "not enough data – only {0} valid closes, need at least {MIN_ANALYSIS_CLOSES}; \
         try a stock with more history"
    )]
    InsufficientHistory(usize),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
