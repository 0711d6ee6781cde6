use crate::view::SummaryView;
use analytics::{CapmResult, moving_average};
use chrono::NaiveDate;
use configuration::DashboardConfig;
use core_types::AlignedReturns;
use serde::{Deserialize, Serialize};

/// A recoverable condition shown to the user next to whatever could still be rendered.
///
/// Serialized as `{ "kind": "InsufficientData", "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message")]
pub enum DashboardWarning {
    /// Too few prices or overlapping returns, a flat benchmark, or a failed fetch.
    InsufficientData(String),
    /// The provider could not resolve the ticker.
    InvalidSymbol(String),
}

impl DashboardWarning {
    pub fn message(&self) -> String {
        match self {
            DashboardWarning::InsufficientData(msg) => msg.clone(),
            DashboardWarning::InvalidSymbol(symbol) => {
                format!("Ticker '{}' could not be found.", symbol)
            }
        }
    }
}

/// One line of a return chart: raw daily returns plus the optional smoothed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub dates: Vec<NaiveDate>,
    pub raw: Vec<f64>,
    /// Trailing moving average; `None` entries are gaps during warm-up.
    pub smoothed: Option<Vec<Option<f64>>>,
}

impl ChartSeries {
    fn new(label: &str, dates: Vec<NaiveDate>, raw: Vec<f64>, ma_window: usize) -> Self {
        let smoothed = moving_average(&raw, ma_window);
        Self {
            label: label.to_string(),
            dates,
            raw,
            smoothed,
        }
    }

    /// Label of the smoothed line, e.g. "AAPL_MA".
    pub fn smoothed_label(&self) -> String {
        format!("{}_MA", self.label)
    }
}

/// The asset and benchmark return charts over the lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnCharts {
    pub lookback_days: usize,
    pub ma_window: usize,
    pub asset: ChartSeries,
    pub benchmark: ChartSeries,
}

impl ReturnCharts {
    /// Windows the aligned returns to the last `lookback_days` rows and smooths each side.
    pub fn build(
        aligned: &AlignedReturns,
        asset_label: &str,
        benchmark_label: &str,
        lookback_days: usize,
        ma_window: usize,
    ) -> Self {
        let window = aligned.tail(lookback_days);
        let dates = window.dates();

        Self {
            lookback_days,
            ma_window,
            asset: ChartSeries::new(asset_label, dates.clone(), window.asset_values(), ma_window),
            benchmark: ChartSeries::new(
                benchmark_label,
                dates,
                window.benchmark_values(),
                ma_window,
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.asset.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asset.dates.is_empty()
    }
}

/// Everything a surface needs to draw one state of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// The validated parameters this payload was computed from.
    pub config: DashboardConfig,
    /// Company name for the ticker; `None` renders as "Not Found".
    pub display_name: Option<String>,
    pub benchmark_label: String,
    pub charts: Option<ReturnCharts>,
    pub result: Option<CapmResult>,
    /// The result laid out for the selected view.
    pub summary: Option<SummaryView>,
    pub warnings: Vec<DashboardWarning>,
}

impl RenderPayload {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
