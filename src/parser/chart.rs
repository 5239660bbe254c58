// Provider chart payload: chart.result[0].meta + .indicators.quote[0]
use crate::model::{ParseError, QuoteMeta, QuoteSeries};
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Option<ChartNode>,
}

#[derive(Debug, Deserialize)]
pub struct ChartNode {
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
    #[serde(rename = "chartPreviousClose")]
    pub chart_previous_close: Option<f64>,
    #[serde(rename = "previousClose")]
    pub previous_close: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteBlock {
    pub close: Option<Vec<Option<f64>>>,
    pub volume: Option<Vec<Option<f64>>>,
}

/// Structural checks over a decoded envelope. Anything missing on the path to
/// the quote block is a malformed payload, handled like a fetch failure by
/// the callers.
pub fn extract_series(envelope: ChartEnvelope) -> Result<QuoteSeries, ParseError> {
    let chart = envelope.chart.ok_or(ParseError::MissingField("chart"))?;
    let mut results = chart
        .result
        .ok_or(ParseError::MissingField("chart.result"))?;
    if results.is_empty() {
        return Err(ParseError::MissingField("chart.result[0]"));
    }
    let result = results.swap_remove(0);

    let indicators = result
        .indicators
        .ok_or(ParseError::MissingField("indicators"))?;
    let quote = indicators
        .quote
        .into_iter()
        .next()
        .ok_or(ParseError::MissingField("indicators.quote[0]"))?;

    Ok(QuoteSeries {
        closes: quote.close.unwrap_or_default(),
        volumes: quote.volume.unwrap_or_default(),
        meta: QuoteMeta {
            regular_market_price: result.meta.regular_market_price,
            chart_previous_close: result.meta.chart_previous_close,
            previous_close: result.meta.previous_close,
        },
        fetched_at: Utc::now(),
    })
}
