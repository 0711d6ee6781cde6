use crate::error::ApiError;
use crate::range::HistoryRange;
use crate::responses::{ChartResponse, ChartResult};
use crate::MarketDataProvider;
use async_trait::async_trait;
use configuration::ProviderSettings;
use core_types::PriceSeries;
use std::time::Duration;

// The chart endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// A `MarketDataProvider` backed by the Yahoo Finance chart API.
#[derive(Clone)]
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }

    async fn fetch_chart(&self, symbol: &str, range: &HistoryRange) -> Result<ChartResult, ApiError> {
        let range = range.to_string();
        let response = self
            .client
            .get(self.chart_url(symbol))
            .query(&[("range", range.as_str()), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(symbol, %status, bytes = text.len(), "Chart response received.");

        // Error bodies carry the same envelope, so parse before looking at the status.
        match serde_json::from_str::<ChartResponse>(&text) {
            Ok(chart) => chart.into_result(symbol),
            Err(_) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(ApiError::InvalidSymbol(symbol.to_string()))
            }
            Err(e) if status.is_success() => Err(ApiError::Deserialization(e.to_string())),
            Err(_) => Err(ApiError::Api(format!("HTTP {}: {}", status, text))),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn fetch_prices(
        &self,
        symbol: &str,
        range: &HistoryRange,
    ) -> Result<PriceSeries, ApiError> {
        let series = self.fetch_chart(symbol, range).await?.into_price_series()?;
        tracing::info!(symbol, %range, points = series.len(), "Fetched price history.");
        Ok(series)
    }

    async fn fetch_display_name(&self, symbol: &str) -> Result<Option<String>, ApiError> {
        match self.fetch_chart(symbol, &HistoryRange::Days(5)).await {
            Ok(chart) => Ok(chart.display_name()),
            Err(ApiError::InvalidSymbol(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
