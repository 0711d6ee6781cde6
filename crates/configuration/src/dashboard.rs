use crate::error::ConfigError;
use core_types::ResultView;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICKER: &str = "AAPL";
pub const MIN_LOOKBACK_DAYS: usize = 1;
pub const MAX_LOOKBACK_DAYS: usize = 365;
pub const DEFAULT_LOOKBACK_DAYS: usize = 365;
pub const MAX_MA_WINDOW: usize = 60;
pub const MAX_RISK_FREE_RATE: f64 = 0.04;
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
const MAX_TICKER_LEN: usize = 15;

/// The user-controlled parameters for one recomputation of the dashboard.
///
/// Construct it through `DashboardConfig::new` or call `validate` on a
/// deserialized value; every consumer downstream assumes the bounds hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// The ticker symbol, upper-cased (e.g., "AAPL").
    pub ticker: String,
    /// How many of the most recent aligned trading days the charts show, 1..=365.
    pub lookback_days: usize,
    /// Moving-average length in days, 0..=60. Zero disables smoothing.
    pub ma_window: usize,
    /// Annual risk-free rate as a fraction, 0.0..=0.04.
    pub risk_free_rate: f64,
    /// Whether the summary is shown as a table or a bar chart.
    pub view: ResultView,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            ma_window: 0,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            view: ResultView::Table,
        }
    }
}

impl DashboardConfig {
    pub fn new(
        ticker: &str,
        lookback_days: usize,
        ma_window: usize,
        risk_free_rate: f64,
        view: ResultView,
    ) -> Result<Self, ConfigError> {
        Self {
            ticker: ticker.to_string(),
            lookback_days,
            ma_window,
            risk_free_rate,
            view,
        }
        .validate()
    }

    /// Normalizes the ticker and enforces the parameter bounds.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.ticker = normalize_ticker(&self.ticker)?;

        if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(ConfigError::ValidationError(format!(
                "lookback_days must be between {} and {}, got {}",
                MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS, self.lookback_days
            )));
        }

        if self.ma_window > MAX_MA_WINDOW {
            return Err(ConfigError::ValidationError(format!(
                "ma_window must be between 0 and {}, got {}",
                MAX_MA_WINDOW, self.ma_window
            )));
        }

        if !self.risk_free_rate.is_finite()
            || !(0.0..=MAX_RISK_FREE_RATE).contains(&self.risk_free_rate)
        {
            return Err(ConfigError::ValidationError(format!(
                "risk_free_rate must be between 0 and {}, got {}",
                MAX_RISK_FREE_RATE, self.risk_free_rate
            )));
        }

        Ok(self)
    }
}

/// Trims and upper-cases a ticker, rejecting anything a quote provider could not resolve.
pub fn normalize_ticker(raw: &str) -> Result<String, ConfigError> {
    let ticker = raw.trim().to_uppercase();

    if ticker.is_empty() {
        return Err(ConfigError::ValidationError(
            "ticker must not be empty".to_string(),
        ));
    }
    if ticker.len() > MAX_TICKER_LEN {
        return Err(ConfigError::ValidationError(format!(
            "ticker '{}' is longer than {} characters",
            ticker, MAX_TICKER_LEN
        )));
    }
    if let Some(bad) = ticker
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '^' | '=' | '-')))
    {
        return Err(ConfigError::ValidationError(format!(
            "ticker '{}' contains invalid character '{}'",
            ticker, bad
        )));
    }

    Ok(ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let config = DashboardConfig::default();
        assert_eq!(config.ticker, "AAPL");
        assert_eq!(config.lookback_days, 365);
        assert_eq!(config.ma_window, 0);
        assert_eq!(config.risk_free_rate, 0.02);
        assert_eq!(config.view, ResultView::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ticker_is_trimmed_and_uppercased() {
        let config = DashboardConfig::new("  msft ", 30, 5, 0.01, ResultView::BarChart).unwrap();
        assert_eq!(config.ticker, "MSFT");
        assert_eq!(normalize_ticker("brk-b").unwrap(), "BRK-B");
        assert_eq!(normalize_ticker("^gspc").unwrap(), "^GSPC");
    }

    #[test]
    fn rejects_bad_tickers() {
        assert!(normalize_ticker("   ").is_err());
        assert!(normalize_ticker("AA PL").is_err());
        assert!(normalize_ticker("AAPL;DROP").is_err());
        assert!(normalize_ticker("ABCDEFGHIJKLMNOP").is_err());
    }

    #[test]
    fn enforces_slider_bounds() {
        assert!(DashboardConfig::new("AAPL", 0, 0, 0.02, ResultView::Table).is_err());
        assert!(DashboardConfig::new("AAPL", 366, 0, 0.02, ResultView::Table).is_err());
        assert!(DashboardConfig::new("AAPL", 1, 0, 0.02, ResultView::Table).is_ok());
        assert!(DashboardConfig::new("AAPL", 365, 60, 0.02, ResultView::Table).is_ok());
        assert!(DashboardConfig::new("AAPL", 365, 61, 0.02, ResultView::Table).is_err());
    }

    #[test]
    fn enforces_risk_free_rate_bounds() {
        assert!(DashboardConfig::new("AAPL", 365, 0, 0.0, ResultView::Table).is_ok());
        assert!(DashboardConfig::new("AAPL", 365, 0, 0.04, ResultView::Table).is_ok());
        assert!(DashboardConfig::new("AAPL", 365, 0, 0.0401, ResultView::Table).is_err());
        assert!(DashboardConfig::new("AAPL", 365, 0, -0.001, ResultView::Table).is_err());
        assert!(DashboardConfig::new("AAPL", 365, 0, f64::NAN, ResultView::Table).is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"ticker":"tsla"}"#).unwrap();
        let config = config.validate().unwrap();
        assert_eq!(config.ticker, "TSLA");
        assert_eq!(config.lookback_days, 365);
    }
}
