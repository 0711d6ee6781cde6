use crate::error::AnalyticsError;
use core_types::AlignedReturns;

/// Fixed trading-year convention used for every annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

// Below this the benchmark is treated as flat and beta is undefined.
const MIN_VARIANCE: f64 = 1e-18;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Beta of the asset against the benchmark over every aligned sample.
///
/// Covariance and variance are both population-normalized (divided by `n`), so
/// the normalization cancels and the ratio equals the sample-normalized one.
pub fn compute_beta(aligned: &AlignedReturns) -> Result<f64, AnalyticsError> {
    if aligned.len() < 2 {
        return Err(AnalyticsError::InsufficientData(format!(
            "beta needs at least 2 aligned returns, got {}",
            aligned.len()
        )));
    }

    let asset = aligned.asset_values();
    let market = aligned.benchmark_values();
    let n = aligned.len() as f64;
    let (asset_mean, market_mean) = (mean(&asset), mean(&market));

    let covariance = asset
        .iter()
        .zip(&market)
        .map(|(a, m)| (a - asset_mean) * (m - market_mean))
        .sum::<f64>()
        / n;
    let variance = market
        .iter()
        .map(|m| (m - market_mean) * (m - market_mean))
        .sum::<f64>()
        / n;

    if !variance.is_finite() || variance < MIN_VARIANCE {
        return Err(AnalyticsError::InsufficientData(
            "benchmark returns have zero variance".to_string(),
        ));
    }

    let beta = covariance / variance;
    if !beta.is_finite() {
        return Err(AnalyticsError::InsufficientData(
            "beta is not a finite number".to_string(),
        ));
    }

    Ok(beta)
}

/// Mean daily return scaled to a 252-day year.
///
/// Returns `f64::NAN` for an empty slice; callers must check for it.
pub fn annualize_arithmetic(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    mean(returns) * TRADING_DAYS_PER_YEAR
}

/// Compounded growth over the period, rescaled to a 252-day year:
/// `(∏(1 + r))^(252 / n) − 1`.
///
/// Returns `f64::NAN` for an empty slice, and also when the compounded growth
/// factor is negative (a fractional power of it is undefined). A wiped-out
/// position (growth of exactly zero) annualizes to `-1.0`.
pub fn annualize_geometric(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    let growth: f64 = returns.iter().map(|r| 1.0 + r).product();
    if growth < 0.0 {
        return f64::NAN;
    }
    growth.powf(TRADING_DAYS_PER_YEAR / returns.len() as f64) - 1.0
}

/// `rf + beta × (market − rf)`.
pub fn capm_expected_return(beta: f64, market_annual_return: f64, risk_free_rate: f64) -> f64 {
    risk_free_rate + beta * (market_annual_return - risk_free_rate)
}
