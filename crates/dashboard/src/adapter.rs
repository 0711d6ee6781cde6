use crate::error::DashboardError;
use crate::payload::{DashboardWarning, RenderPayload, ReturnCharts};
use crate::view::SummaryView;
use analytics::ReturnEngine;
use api_client::error::ApiError;
use api_client::{HistoryRange, MarketDataProvider};
use configuration::{DashboardConfig, ProviderSettings};
use core_types::PriceSeries;
use std::sync::Arc;

pub const CHARTS_UNAVAILABLE: &str = "Not enough data to display interactive return charts.";
pub const CAPM_UNAVAILABLE: &str =
    "Not enough overlapping returns to compute CAPM. Check data/period.";

/// The recomputation trigger of the dashboard.
///
/// Holds only immutable collaborators. Each call to `recompute` is one full,
/// sequential pass: fetch, compute, lay out.
pub struct Dashboard {
    provider: Arc<dyn MarketDataProvider>,
    engine: ReturnEngine,
    benchmark_symbol: String,
    benchmark_label: String,
    range: HistoryRange,
}

impl Dashboard {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        settings: &ProviderSettings,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            provider,
            engine: ReturnEngine::new(),
            benchmark_symbol: settings.benchmark_symbol.clone(),
            benchmark_label: settings.benchmark_label.clone(),
            range: settings.history_range.parse::<HistoryRange>()?,
        })
    }

    pub fn benchmark_label(&self) -> &str {
        &self.benchmark_label
    }

    /// Looks up the company name. Failures are cosmetic and read as "not found".
    pub async fn display_name(&self, symbol: &str) -> Option<String> {
        match self.provider.fetch_display_name(symbol).await {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(symbol, error = %e, "Display name lookup failed.");
                None
            }
        }
    }

    /// Runs one full recomputation for `config` and returns what to render.
    ///
    /// This never fails: provider errors and insufficient data are reported as
    /// warnings and the affected sections of the payload are left empty.
    pub async fn recompute(&self, config: &DashboardConfig) -> RenderPayload {
        tracing::info!(
            ticker = %config.ticker,
            lookback_days = config.lookback_days,
            ma_window = config.ma_window,
            risk_free_rate = config.risk_free_rate,
            "Recomputing dashboard."
        );
        let mut warnings = Vec::new();

        let asset = self.fetch_or_warn(&config.ticker, &mut warnings).await;
        let display_name = self.display_name(&config.ticker).await;
        let benchmark = self.fetch_or_warn(&self.benchmark_symbol, &mut warnings).await;

        let aligned = self.engine.prepare(&asset, &benchmark);

        let charts = if aligned.is_empty() {
            warnings.push(DashboardWarning::InsufficientData(
                CHARTS_UNAVAILABLE.to_string(),
            ));
            None
        } else {
            Some(ReturnCharts::build(
                &aligned,
                &config.ticker,
                &self.benchmark_label,
                config.lookback_days,
                config.ma_window,
            ))
        };

        let result = match self.engine.summarize_aligned(
            &config.ticker,
            config.risk_free_rate,
            &aligned,
        ) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(ticker = %config.ticker, error = %e, "CAPM summary unavailable.");
                warnings.push(DashboardWarning::InsufficientData(format!(
                    "{} ({})",
                    CAPM_UNAVAILABLE, e
                )));
                None
            }
        };

        let summary = result
            .as_ref()
            .map(|r| SummaryView::build(r, config.view, &self.benchmark_label));

        RenderPayload {
            config: config.clone(),
            display_name,
            benchmark_label: self.benchmark_label.clone(),
            charts,
            result,
            summary,
            warnings,
        }
    }

    /// Fetches a series, turning any provider failure into a warning and an empty series.
    async fn fetch_or_warn(
        &self,
        symbol: &str,
        warnings: &mut Vec<DashboardWarning>,
    ) -> PriceSeries {
        match self.provider.fetch_prices(symbol, &self.range).await {
            Ok(series) => {
                if series.is_empty() {
                    tracing::warn!(symbol, "Provider returned no prices.");
                }
                series
            }
            Err(ApiError::InvalidSymbol(s)) => {
                tracing::warn!(symbol, "Provider could not resolve symbol.");
                warnings.push(DashboardWarning::InvalidSymbol(s));
                PriceSeries::empty(symbol)
            }
            Err(e) => {
                tracing::warn!(symbol, error = %e, "Price fetch failed.");
                warnings.push(DashboardWarning::InsufficientData(format!(
                    "Price data for {} is unavailable: {}",
                    symbol, e
                )));
                PriceSeries::empty(symbol)
            }
        }
    }
}
