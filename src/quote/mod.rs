pub mod fetcher;
pub mod traits;

pub use fetcher::YahooFetcher;
pub use traits::QuoteSource;
