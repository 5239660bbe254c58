use crate::model::{FetchError, QuoteSeries, Range};

/// Boundary to the external quote provider. Implementations must keep every
/// call independent so per-symbol failures stay isolated.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_series(&self, symbol: &str, range: Range) -> Result<QuoteSeries, FetchError>;
}
