pub mod format;

pub use format::{format_picks, format_symbol_report, QUIET_MARKET_TEXT};

/// Where rendered result text ends up. The core only ever hands over
/// finished strings.
pub trait ResultSink {
    fn present(&self, text: &str);
}

pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn present(&self, text: &str) {
        println!("{text}");
    }
}
