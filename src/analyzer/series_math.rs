// Pure numeric helpers shared by the ranking and analysis paths.
use crate::config::{OSCILLATOR_PERIOD, OVERBOUGHT_THRESHOLD, OVERSOLD_THRESHOLD};
use std::fmt;

/// Arithmetic mean of the trailing `period` closes, or of the whole series
/// when fewer are available. `None` on empty input.
pub fn sma(closes: &[f64], period: usize) -> Option<f64> {
    if closes.is_empty() || period == 0 {
        return None;
    }
    let start = closes.len().saturating_sub(period);
    let window = &closes[start..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// RSI-style momentum oscillator over the trailing 14 closes. The divisor
/// stays 14 even for shorter windows, and a window with zero summed losses
/// clamps to 100 (maximal upward momentum) instead of dividing by zero.
pub fn momentum_oscillator(closes: &[f64]) -> f64 {
    let start = closes.len().saturating_sub(OSCILLATOR_PERIOD);
    let window = &closes[start..];

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in window.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let avg_gain = gains / OSCILLATOR_PERIOD as f64;
    let avg_loss = losses / OSCILLATOR_PERIOD as f64;
    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentumLabel {
    Overbought,
    Oversold,
    Neutral,
}

impl fmt::Display for MomentumLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MomentumLabel::Overbought => "Overbought (Consider Selling)",
            MomentumLabel::Oversold => "Oversold (Consider Buying)",
            MomentumLabel::Neutral => "Neutral (Hold Steady)",
        };
        f.write_str(text)
    }
}

pub fn classify_momentum(value: f64) -> MomentumLabel {
    if value > OVERBOUGHT_THRESHOLD {
        MomentumLabel::Overbought
    } else if value < OVERSOLD_THRESHOLD {
        MomentumLabel::Oversold
    } else {
        MomentumLabel::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendLabel {
    Bullish,
    Bearish,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrendLabel::Bullish => "Buy (Bullish Trend)",
            TrendLabel::Bearish => "Sell (Bearish Trend)",
        };
        f.write_str(text)
    }
}

/// Strict comparison; equal averages classify bearish. Fixed convention, not
/// a gap.
pub fn classify_trend(short_sma: f64, long_sma: f64) -> TrendLabel {
    if short_sma > long_sma {
        TrendLabel::Bullish
    } else {
        TrendLabel::Bearish
    }
}
