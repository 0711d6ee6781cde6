use crate::error::ApiError;
use async_trait::async_trait;
use configuration::{ProviderKind, ProviderSettings};
use core_types::PriceSeries;
use std::sync::Arc;

pub mod csv_provider;
pub mod error;
pub mod range;
pub mod responses;
pub mod yahoo;

// --- Public API ---
pub use csv_provider::CsvDirectoryProvider;
pub use range::HistoryRange;
pub use yahoo::YahooClient;

/// The abstract interface to a source of daily price history.
///
/// Every implementation normalizes its raw response into a single `PriceSeries`,
/// so nothing downstream needs to know what the provider returned on the wire.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches adjusted daily closes for `symbol` covering `range`.
    ///
    /// An unknown symbol is `ApiError::InvalidSymbol`. A known symbol with no
    /// data in the range is an empty series, not an error.
    async fn fetch_prices(&self, symbol: &str, range: &HistoryRange)
    -> Result<PriceSeries, ApiError>;

    /// Looks up a human-readable name for `symbol`; `None` when not found.
    async fn fetch_display_name(&self, symbol: &str) -> Result<Option<String>, ApiError>;
}

/// Builds the provider selected in the settings.
pub fn provider_from_settings(
    settings: &ProviderSettings,
) -> Result<Arc<dyn MarketDataProvider>, ApiError> {
    let provider: Arc<dyn MarketDataProvider> = match settings.kind {
        ProviderKind::Yahoo => Arc::new(YahooClient::new(settings)?),
        ProviderKind::Csv => Arc::new(CsvDirectoryProvider::new(&settings.csv_dir)),
    };
    tracing::info!(kind = ?settings.kind, "Market-data provider ready.");
    Ok(provider)
}
