// Heuristic pick scoring: percent gain + volume in millions + signal count.
// Deliberately unnormalized; the three terms sit on comparable scales.
use crate::model::QuoteMeta;

const VOLUME_SCALE: f64 = 1_000_000.0;

/// Resolves the (current, previous) price pair from the meta block. Current
/// falls back from the live price through the chart previous close to the
/// plain previous close; previous falls back to current. `None` means the
/// payload carried no usable reference and the symbol cannot be scored.
pub fn reference_prices(meta: &QuoteMeta) -> Option<(f64, f64)> {
    let current = meta
        .regular_market_price
        .or(meta.chart_previous_close)
        .or(meta.previous_close)?;
    let previous = meta.previous_close.unwrap_or(current);
    Some((current, previous))
}

pub fn percent_gain(current: f64, previous: f64) -> f64 {
    (current - previous) / previous * 100.0
}

pub fn pick_score(percent_gain: f64, average_volume: f64, signal_count: usize) -> f64 {
    percent_gain + average_volume / VOLUME_SCALE + signal_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_live_price() {
        let meta = QuoteMeta {
            regular_market_price: Some(110.0),
            chart_previous_close: Some(105.0),
            previous_close: Some(100.0),
        };
        assert_eq!(reference_prices(&meta), Some((110.0, 100.0)));
    }

    #[test]
    fn falls_back_through_the_close_fields() {
        let meta = QuoteMeta {
            regular_market_price: None,
            chart_previous_close: Some(105.0),
            previous_close: None,
        };
        // No previous close at all: previous falls back to current, gain 0.
        assert_eq!(reference_prices(&meta), Some((105.0, 105.0)));

        let meta = QuoteMeta {
            regular_market_price: None,
            chart_previous_close: None,
            previous_close: Some(100.0),
        };
        assert_eq!(reference_prices(&meta), Some((100.0, 100.0)));
    }

    #[test]
    fn no_reference_price_means_unscorable() {
        assert_eq!(reference_prices(&QuoteMeta::default()), None);
    }

    #[test]
    fn gain_is_signed_percent() {
        assert!((percent_gain(110.0, 100.0) - 10.0).abs() < 1e-9);
        assert!((percent_gain(95.0, 100.0) + 5.0).abs() < 1e-9);
    }

    #[test]
    fn score_sums_the_three_terms() {
        let score = pick_score(2.5, 3_000_000.0, 4);
        assert!((score - 9.5).abs() < 1e-9);
    }
}
