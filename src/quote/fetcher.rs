use crate::config::{FETCH_ATTEMPTS, FETCH_TIMEOUT_SECS, RETRY_DELAY_SECS};
use crate::model::{FetchError, QuoteSeries, Range};
use crate::parser::chart::{extract_series, ChartEnvelope};
use crate::quote::traits::QuoteSource;

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Alternated between attempts so a single bad edge does not sink a symbol.
const HOSTS: [&str; 2] = ["query1.finance.yahoo.com", "query2.finance.yahoo.com"];

pub struct YahooFetcher {
    client: Client,
}

impl YahooFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) TdSniperBot/0.1")
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    fn build_url(&self, host: &str, symbol: &str, range: Range) -> String {
        format!(
            "https://{}/v8/finance/chart/{}?range={}&interval=1d",
            host,
            symbol,
            range.as_str()
        )
    }

    /// One transport attempt: request plus JSON decode. Both failure kinds
    /// are retryable; structural checks happen after the retry loop.
    async fn fetch_envelope(&self, url: &str) -> Result<ChartEnvelope, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(format!("response not ok: {}", status)));
        }

        response
            .json::<ChartEnvelope>()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))
    }
}

impl Default for YahooFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl QuoteSource for YahooFetcher {
    async fn fetch_series(&self, symbol: &str, range: Range) -> Result<QuoteSeries, FetchError> {
        for attempt in 0..FETCH_ATTEMPTS {
            let host = HOSTS[attempt % HOSTS.len()];
            let url = self.build_url(host, symbol, range);

            match self.fetch_envelope(&url).await {
                // A decodable but structurally wrong payload will not improve
                // on retry, surface it straight away.
                Ok(envelope) => return Ok(extract_series(envelope)?),
                Err(e) => {
                    warn!(
                        "Fetch attempt {}/{} for {} ({}) failed: {}",
                        attempt + 1,
                        FETCH_ATTEMPTS,
                        symbol,
                        range.as_str(),
                        e
                    );
                }
            }

            if attempt + 1 < FETCH_ATTEMPTS {
                sleep(Duration::from_secs(RETRY_DELAY_SECS)).await;
            }
        }

        Err(FetchError::Unavailable)
    }
}
