// Watch-list ranking pass: fan out one scoring task per symbol, collect the
// successes, stable-sort by score and keep the top picks.
use crate::analyzer::scoring::{percent_gain, pick_score, reference_prices};
use crate::analyzer::td_sequential::detect;
use crate::config::TOP_PICKS;
use crate::model::{InstrumentMetrics, Range};
use crate::quote::QuoteSource;

use futures::future::join_all;
use std::cmp::Ordering;
use tracing::{info, warn};

/// Result of one ranking pass. An empty pass is its own state so the caller
/// can tell a quiet market apart from a fetch problem.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    Ranked(Vec<InstrumentMetrics>),
    QuietMarket,
}

/// Scores every watch-list symbol and returns the top picks, descending by
/// score. Failing symbols are skipped; ties keep watch-list order, which the
/// ordered fan-in below preserves regardless of completion order.
pub async fn rank_picks(source: &dyn QuoteSource, watch_list: &[String]) -> RankOutcome {
    let tasks = watch_list.iter().map(|symbol| score_symbol(source, symbol));
    // join_all yields results in input order, keeping the watch-list position
    // as the implicit secondary sort key.
    let scored = join_all(tasks).await;

    let mut picks: Vec<InstrumentMetrics> = scored.into_iter().flatten().collect();
    info!("Scored {}/{} watch-list symbols", picks.len(), watch_list.len());

    picks.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    picks.truncate(TOP_PICKS);

    if picks.is_empty() {
        RankOutcome::QuietMarket
    } else {
        RankOutcome::Ranked(picks)
    }
}

/// Derives one symbol's metrics. Any failure (fetch, payload shape, unusable
/// data) drops the symbol from this pass and must never abort the batch.
async fn score_symbol(source: &dyn QuoteSource, symbol: &str) -> Option<InstrumentMetrics> {
    let quote = match source.fetch_series(symbol, Range::Short).await {
        Ok(series) => series,
        Err(e) => {
            warn!("Skipping {}: quote fetch failed: {}", symbol, e);
            return None;
        }
    };
    let history = match source.fetch_series(symbol, Range::Medium).await {
        Ok(series) => series,
        Err(e) => {
            warn!("Skipping {}: history fetch failed: {}", symbol, e);
            return None;
        }
    };

    let Some((current, previous)) = reference_prices(&quote.meta) else {
        warn!("Skipping {}: no usable reference price", symbol);
        return None;
    };

    let closes = history.valid_closes();
    if closes.is_empty() {
        warn!("Skipping {}: history has no valid closes", symbol);
        return None;
    }

    // Mean of the available volume observations, aligned to the filtered
    // close count.
    let average_volume = history.volumes.iter().flatten().sum::<f64>() / closes.len() as f64;
    let signal_count = detect(&closes).len();
    let gain = percent_gain(current, previous);

    Some(InstrumentMetrics {
        symbol: symbol.to_string(),
        percent_gain: gain,
        average_volume,
        signal_count,
        score: pick_score(gain, average_volume, signal_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, QuoteMeta, QuoteSeries};
    use chrono::Utc;
    use std::collections::HashMap;

    struct StaticSource {
        series: HashMap<(String, Range), QuoteSeries>,
    }

    impl StaticSource {
        fn new() -> Self {
            Self { series: HashMap::new() }
        }

        fn insert(&mut self, symbol: &str, range: Range, series: QuoteSeries) {
            self.series.insert((symbol.to_string(), range), series);
        }

        /// Registers a symbol whose score works out to exactly
        /// `gain + volume_millions` (flat history, no signals).
        fn with_pick(mut self, symbol: &str, gain: f64, volume_millions: f64) -> Self {
            self.insert(
                symbol,
                Range::Short,
                quote_series(
                    QuoteMeta {
                        regular_market_price: Some(100.0 + gain),
                        chart_previous_close: None,
                        previous_close: Some(100.0),
                    },
                    vec![Some(100.0)],
                    vec![None],
                ),
            );
            self.insert(
                symbol,
                Range::Medium,
                quote_series(
                    QuoteMeta::default(),
                    vec![Some(100.0), Some(100.0)],
                    vec![
                        Some(volume_millions * 1_000_000.0),
                        Some(volume_millions * 1_000_000.0),
                    ],
                ),
            );
            self
        }
    }

    #[async_trait::async_trait]
    impl QuoteSource for StaticSource {
        async fn fetch_series(
            &self,
            symbol: &str,
            range: Range,
        ) -> Result<QuoteSeries, FetchError> {
            self.series
                .get(&(symbol.to_string(), range))
                .cloned()
                .ok_or(FetchError::Unavailable)
        }
    }

    struct DownSource;

    #[async_trait::async_trait]
    impl QuoteSource for DownSource {
        async fn fetch_series(&self, _: &str, _: Range) -> Result<QuoteSeries, FetchError> {
            Err(FetchError::Unavailable)
        }
    }

    fn quote_series(
        meta: QuoteMeta,
        closes: Vec<Option<f64>>,
        volumes: Vec<Option<f64>>,
    ) -> QuoteSeries {
        QuoteSeries { closes, volumes, meta, fetched_at: Utc::now() }
    }

    fn watch(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn symbols(outcome: &RankOutcome) -> Vec<&str> {
        match outcome {
            RankOutcome::Ranked(picks) => picks.iter().map(|p| p.symbol.as_str()).collect(),
            RankOutcome::QuietMarket => Vec::new(),
        }
    }

    #[tokio::test]
    async fn ties_keep_watch_list_order() {
        // CCC and BBB tie at 7.2; CCC sits earlier in the list and must stay
        // ahead of BBB in the output.
        let source = StaticSource::new()
            .with_pick("AAA", 5.0, 0.0)
            .with_pick("CCC", 7.2, 0.0)
            .with_pick("BBB", 7.2, 0.0);
        let outcome = rank_picks(&source, &watch(&["AAA", "CCC", "BBB"])).await;
        assert_eq!(symbols(&outcome), vec!["CCC", "BBB", "AAA"]);
    }

    #[tokio::test]
    async fn every_fetch_failing_is_a_quiet_market() {
        let outcome = rank_picks(&DownSource, &watch(&["AAA", "BBB", "CCC"])).await;
        assert_eq!(outcome, RankOutcome::QuietMarket);
    }

    #[tokio::test]
    async fn one_failing_symbol_does_not_abort_the_pass() {
        let source = StaticSource::new().with_pick("AAA", 1.0, 2.0);
        let outcome = rank_picks(&source, &watch(&["MISSING", "AAA"])).await;
        assert_eq!(symbols(&outcome), vec!["AAA"]);
    }

    #[tokio::test]
    async fn output_is_capped_at_ten() {
        let mut source = StaticSource::new();
        let mut list = Vec::new();
        for i in 0..12 {
            let symbol = format!("SYM{i}");
            source = source.with_pick(&symbol, i as f64, 0.0);
            list.push(symbol);
        }
        match rank_picks(&source, &list).await {
            RankOutcome::Ranked(picks) => {
                assert_eq!(picks.len(), 10);
                // Highest gain first, the two weakest symbols dropped.
                assert_eq!(picks[0].symbol, "SYM11");
                assert_eq!(picks[9].symbol, "SYM2");
            }
            RankOutcome::QuietMarket => panic!("expected ranked picks"),
        }
    }

    #[tokio::test]
    async fn metrics_combine_gain_volume_and_signals() {
        let source = StaticSource::new().with_pick("AAA", 2.0, 3.0);
        match rank_picks(&source, &watch(&["AAA"])).await {
            RankOutcome::Ranked(picks) => {
                let pick = &picks[0];
                assert!((pick.percent_gain - 2.0).abs() < 1e-9);
                assert!((pick.average_volume - 3_000_000.0).abs() < 1e-6);
                assert_eq!(pick.signal_count, 0);
                assert!((pick.score - 5.0).abs() < 1e-9);
            }
            RankOutcome::QuietMarket => panic!("expected ranked picks"),
        }
    }
}
