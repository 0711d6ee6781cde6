use crate::dashboard::{DashboardConfig, normalize_ticker};
use crate::error::ConfigError;
use core_types::ResultView;

/// Command-line overrides for the dashboard controls.
///
/// Every flag is optional; anything omitted keeps the value from `config.toml`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DashboardArgs {
    /// The stock ticker to analyze (e.g., "AAPL"). Case-insensitive.
    #[arg(long)]
    pub ticker: Option<String>,

    /// Show the last N aligned trading days in the return charts (1-365).
    #[arg(long)]
    pub lookback_days: Option<usize>,

    /// Moving-average length in days (0-60, 0 disables smoothing).
    #[arg(long = "ma-days")]
    pub ma_window: Option<usize>,

    /// Annual risk-free rate as a fraction (0-0.04).
    #[arg(long)]
    pub risk_free_rate: Option<f64>,

    /// Present the summary as a "table" or a "bar_chart".
    #[arg(long)]
    pub view: Option<ResultView>,
}

impl DashboardArgs {
    /// Layers the given flags over `base` and validates the result.
    pub fn apply(&self, base: &DashboardConfig) -> Result<DashboardConfig, ConfigError> {
        let ticker = match &self.ticker {
            Some(t) => normalize_ticker(t)?,
            None => base.ticker.clone(),
        };

        DashboardConfig::new(
            &ticker,
            self.lookback_days.unwrap_or(base.lookback_days),
            self.ma_window.unwrap_or(base.ma_window),
            self.risk_free_rate.unwrap_or(base.risk_free_rate),
            self.view.unwrap_or(base.view),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        dashboard: DashboardArgs,
    }

    #[test]
    fn flags_override_file_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--ticker",
            "nvda",
            "--ma-days",
            "20",
            "--view",
            "bar_chart",
        ]);
        let config = cli.dashboard.apply(&DashboardConfig::default()).unwrap();

        assert_eq!(config.ticker, "NVDA");
        assert_eq!(config.ma_window, 20);
        assert_eq!(config.view, ResultView::BarChart);
        assert_eq!(config.lookback_days, 365);
        assert_eq!(config.risk_free_rate, 0.02);
    }

    #[test]
    fn out_of_range_flags_are_rejected() {
        let cli = TestCli::parse_from(["test", "--risk-free-rate", "0.05"]);
        assert!(cli.dashboard.apply(&DashboardConfig::default()).is_err());
    }
}
