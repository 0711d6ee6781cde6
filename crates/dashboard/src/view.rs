use analytics::CapmResult;
use core_types::ResultView;
use serde::{Deserialize, Serialize};

pub const BAR_CHART_TITLE: &str = "CAPM vs Realized Annual Returns Chart";

/// Formats a fraction as a percentage with two decimals, e.g. 0.1234 -> "12.34%".
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn format_beta(value: f64) -> String {
    format!("{:.4}", value)
}

/// One labelled line of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: f64,
    pub formatted: String,
}

/// One bar of the summary bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub text: String,
}

/// The CAPM result laid out for the view the user selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SummaryView {
    Table {
        ticker: String,
        rows: Vec<SummaryRow>,
    },
    BarChart {
        title: String,
        bars: Vec<Bar>,
    },
}

impl SummaryView {
    pub fn build(result: &CapmResult, view: ResultView, benchmark_label: &str) -> Self {
        match view {
            ResultView::Table => SummaryView::Table {
                ticker: result.ticker.clone(),
                rows: table_rows(result, benchmark_label),
            },
            ResultView::BarChart => SummaryView::BarChart {
                title: BAR_CHART_TITLE.to_string(),
                bars: bars(result),
            },
        }
    }
}

fn table_rows(result: &CapmResult, benchmark_label: &str) -> Vec<SummaryRow> {
    let percent = |label: String, value: f64| SummaryRow {
        label,
        value,
        formatted: format_percent(value),
    };

    vec![
        SummaryRow {
            label: "Beta".to_string(),
            value: result.beta,
            formatted: format_beta(result.beta),
        },
        percent(
            format!("Benchmark ({}) Annual Return", benchmark_label),
            result.benchmark_annual_return,
        ),
        percent(
            "CAPM Portfolio Annual Expected Return".to_string(),
            result.capm_expected_return,
        ),
        percent(
            "Realized Annual Portfolio Arithmetic Return".to_string(),
            result.realized_arithmetic_return,
        ),
        percent(
            "Realized Annual Portfolio Geometric Return".to_string(),
            result.realized_geometric_return,
        ),
    ]
}

// Each bar is labelled with its own metric and value.
fn bars(result: &CapmResult) -> Vec<Bar> {
    [
        ("CAPM Portfolio Annual Expected Return", result.capm_expected_return),
        ("Realized Annual Portfolio Arithmetic Return", result.realized_arithmetic_return),
        ("Realized Annual Portfolio Geometric Return", result.realized_geometric_return),
    ]
    .into_iter()
    .map(|(label, value)| Bar {
        label: label.to_string(),
        value,
        text: format_percent(value),
    })
    .collect()
}
