// Builds the screener's output text from analyzer results.
use crate::analyzer::SymbolReport;
use crate::model::InstrumentMetrics;
use crate::utils::group_digits;
use chrono::Utc;

pub const QUIET_MARKET_TEXT: &str =
    "Quiet market right now – try during trading hours for more action!";

/// Signed two-decimal percent, e.g. "+1.23%" / "-0.45%".
pub fn format_gain(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

pub fn format_picks(picks: &[InstrumentMetrics]) -> String {
    let mut out = format!(
        "Top Picks as of {} (Ranked by Gain + Volume + TD Strength; TD Score: Higher = More Signals)\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    for pick in picks {
        out.push_str(&format!(
            "{}: {} gain, Vol: {}, TD Score: {}\n",
            pick.symbol,
            format_gain(pick.percent_gain),
            group_digits(pick.average_volume),
            pick.signal_count
        ));
    }
    out
}

pub fn format_symbol_report(report: &SymbolReport) -> String {
    let mut out = format!("Analysis for {}:\n", report.symbol);
    if report.signals.is_empty() {
        out.push_str("No TD signals – try a volatile stock for more action!\n");
    } else {
        for signal in &report.signals {
            out.push_str(&format!("{signal}\n"));
        }
    }
    out.push_str(&format!("RSI: {:.2} ({})\n", report.oscillator, report.momentum));
    out.push_str(&format!(
        "SMA Crossover: {} (50-day {:.2} vs 200-day {:.2})\n",
        report.trend, report.short_sma, report.long_sma
    ));
    out
}
