use serde::{Deserialize, Serialize};

/// The CAPM summary for one ticker against the benchmark.
///
/// All returns are annualized fractions (0.12 is 12%). Formatting as percentages
/// is left to whoever renders the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapmResult {
    pub ticker: String,
    pub beta: f64,
    pub benchmark_annual_return: f64,
    pub capm_expected_return: f64,
    pub realized_arithmetic_return: f64,
    pub realized_geometric_return: f64,
    /// Number of aligned daily samples the statistics were computed from.
    #[serde(default)]
    pub observations: usize,
}

impl CapmResult {
    /// True when every statistic is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.beta,
            self.benchmark_annual_return,
            self.capm_expected_return,
            self.realized_arithmetic_return,
            self.realized_geometric_return,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
