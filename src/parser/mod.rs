pub mod chart;

pub use chart::{extract_series, ChartEnvelope};
