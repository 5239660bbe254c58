// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod picks;
pub mod scoring;
pub mod series_math;
pub mod symbol;
pub mod td_sequential;

// Re-export the main entry points for ease of use.
pub use picks::{rank_picks, RankOutcome};
pub use symbol::{analyze_symbol, SymbolReport};
pub use td_sequential::{detect, Direction, SignalEvent, SignalKind};
