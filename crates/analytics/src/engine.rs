use crate::error::AnalyticsError;
use crate::report::CapmResult;
use crate::returns::{align, daily_returns};
use crate::stats::{annualize_arithmetic, annualize_geometric, capm_expected_return, compute_beta};
use configuration::DashboardConfig;
use core_types::{AlignedReturns, PriceSeries};

/// A stateless calculator that sequences the return and CAPM computations for
/// one recomputation pass.
#[derive(Debug, Default)]
pub struct ReturnEngine {}

impl ReturnEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives daily returns for both series and inner-joins them on date.
    pub fn prepare(&self, asset: &PriceSeries, benchmark: &PriceSeries) -> AlignedReturns {
        let asset_returns = daily_returns(asset);
        let benchmark_returns = daily_returns(benchmark);
        let aligned = align(&asset_returns, &benchmark_returns);

        tracing::debug!(
            asset = %asset.symbol,
            benchmark = %benchmark.symbol,
            asset_returns = asset_returns.len(),
            benchmark_returns = benchmark_returns.len(),
            aligned = aligned.len(),
            "Prepared aligned returns."
        );

        aligned
    }

    /// The main entry point: prices in, CAPM summary out.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the ticker label and the annual risk-free rate. The
    ///   rate is trusted to be within the range enforced at config intake.
    /// * `asset` - Adjusted closes of the ticker.
    /// * `benchmark` - Adjusted closes of the benchmark index.
    ///
    /// # Returns
    ///
    /// The `CapmResult`, or `AnalyticsError::InsufficientData` when the overlap is
    /// too short, the benchmark is flat, or any statistic is not finite.
    pub fn summarize(
        &self,
        config: &DashboardConfig,
        asset: &PriceSeries,
        benchmark: &PriceSeries,
    ) -> Result<CapmResult, AnalyticsError> {
        let aligned = self.prepare(asset, benchmark);
        self.summarize_aligned(&config.ticker, config.risk_free_rate, &aligned)
    }

    /// Computes the CAPM summary from returns that are already aligned.
    pub fn summarize_aligned(
        &self,
        ticker: &str,
        risk_free_rate: f64,
        aligned: &AlignedReturns,
    ) -> Result<CapmResult, AnalyticsError> {
        if aligned.is_empty() {
            tracing::warn!(ticker, "No overlapping returns between asset and benchmark.");
            return Err(AnalyticsError::InsufficientData(
                "no overlapping returns between asset and benchmark".to_string(),
            ));
        }

        let beta = compute_beta(aligned).inspect_err(|e| {
            tracing::warn!(ticker, error = %e, "Beta could not be computed.");
        })?;

        let asset_returns = aligned.asset_values();
        let benchmark_annual_return = annualize_arithmetic(&aligned.benchmark_values());
        let capm_expected = capm_expected_return(beta, benchmark_annual_return, risk_free_rate);

        let result = CapmResult {
            ticker: ticker.to_string(),
            beta,
            benchmark_annual_return,
            capm_expected_return: capm_expected,
            realized_arithmetic_return: annualize_arithmetic(&asset_returns),
            realized_geometric_return: annualize_geometric(&asset_returns),
            observations: aligned.len(),
        };

        if !result.is_finite() {
            tracing::warn!(ticker, ?result, "CAPM summary contains non-finite values.");
            return Err(AnalyticsError::InsufficientData(
                "computed statistics are not finite".to_string(),
            ));
        }

        tracing::debug!(
            ticker,
            beta = result.beta,
            capm = result.capm_expected_return,
            observations = result.observations,
            "CAPM summary computed."
        );

        Ok(result)
    }
}
