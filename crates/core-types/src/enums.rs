use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the CAPM summary is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultView {
    #[default]
    Table,
    BarChart,
}

impl ResultView {
    /// Returns the other view, as a toggle would.
    pub fn toggled(&self) -> Self {
        match self {
            ResultView::Table => ResultView::BarChart,
            ResultView::BarChart => ResultView::Table,
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Table => write!(f, "table"),
            ResultView::BarChart => write!(f, "bar_chart"),
        }
    }
}

impl FromStr for ResultView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "table" => Ok(ResultView::Table),
            "bar_chart" | "bar" | "chart" => Ok(ResultView::BarChart),
            other => Err(CoreError::InvalidInput(
                "view".to_string(),
                format!("unknown view '{}', expected 'table' or 'bar_chart'", other),
            )),
        }
    }
}
