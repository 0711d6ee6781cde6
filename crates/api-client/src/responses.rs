use crate::error::ApiError;
use chrono::DateTime;
use core_types::{PricePoint, PriceSeries};
use serde::Deserialize;

// Using `#[serde(rename_all = "camelCase")]` to automatically map from JSON camelCase to Rust snake_case.

/// The envelope of `GET /v8/finance/chart/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Represents an error object inside a chart response, e.g. code "Not Found".
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    /// Offset of the exchange's local time from UTC, in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseIndicator>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjCloseIndicator {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Returns the single chart result, mapping the provider's error object.
    pub fn into_result(self, symbol: &str) -> Result<ChartResult, ApiError> {
        if let Some(error) = self.chart.error {
            return Err(if error.code.eq_ignore_ascii_case("Not Found") {
                ApiError::InvalidSymbol(symbol.to_string())
            } else {
                ApiError::Api(format!("{}: {}", error.code, error.description))
            });
        }

        self.chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ApiError::InvalidSymbol(symbol.to_string()))
    }
}

impl ChartResult {
    /// The display name, preferring the long form.
    pub fn display_name(&self) -> Option<String> {
        self.meta
            .long_name
            .clone()
            .or_else(|| self.meta.short_name.clone())
            .filter(|name| !name.trim().is_empty())
    }

    /// Normalizes the response into a `PriceSeries` of adjusted closes.
    ///
    /// Adjusted closes are used when the response carries them, raw closes
    /// otherwise. Rows with a null price are skipped. Timestamps are shifted to
    /// the exchange's local time before taking the calendar date.
    pub fn into_price_series(self) -> Result<PriceSeries, ApiError> {
        let closes = match self.indicators.adjclose.into_iter().next() {
            Some(adj) if !adj.adjclose.is_empty() => adj.adjclose,
            _ => self
                .indicators
                .quote
                .into_iter()
                .next()
                .map(|q| q.close)
                .unwrap_or_default(),
        };

        let mut points = Vec::with_capacity(self.timestamp.len());
        for (ts, close) in self.timestamp.iter().zip(closes) {
            let Some(close) = close else { continue };
            let date = DateTime::from_timestamp(ts + self.meta.gmtoffset, 0)
                .ok_or_else(|| ApiError::InvalidData(format!("Invalid timestamp: {}", ts)))?
                .date_naive();
            points.push(PricePoint { date, close });
        }

        Ok(PriceSeries::new(self.meta.symbol, points))
    }
}
