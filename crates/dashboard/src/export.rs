use crate::error::ExportError;
use analytics::CapmResult;
use serde::{Deserialize, Serialize};

/// Column headers of the export, in order.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "Ticker",
    "Beta",
    "Benchmark Annual Return",
    "CAPM Portfolio Annual Expected Return",
    "Realized Annual Portfolio Arithmetic Return",
    "Realized Annual Portfolio Geometric Return",
];

/// The flat record written to CSV. Returns stay fractions here.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Beta")]
    beta: f64,
    #[serde(rename = "Benchmark Annual Return")]
    benchmark_annual_return: f64,
    #[serde(rename = "CAPM Portfolio Annual Expected Return")]
    capm_expected_return: f64,
    #[serde(rename = "Realized Annual Portfolio Arithmetic Return")]
    realized_arithmetic_return: f64,
    #[serde(rename = "Realized Annual Portfolio Geometric Return")]
    realized_geometric_return: f64,
}

impl From<&CapmResult> for ExportRow {
    fn from(r: &CapmResult) -> Self {
        Self {
            ticker: r.ticker.clone(),
            beta: r.beta,
            benchmark_annual_return: r.benchmark_annual_return,
            capm_expected_return: r.capm_expected_return,
            realized_arithmetic_return: r.realized_arithmetic_return,
            realized_geometric_return: r.realized_geometric_return,
        }
    }
}

impl From<ExportRow> for CapmResult {
    fn from(row: ExportRow) -> Self {
        Self {
            ticker: row.ticker,
            beta: row.beta,
            benchmark_annual_return: row.benchmark_annual_return,
            capm_expected_return: row.capm_expected_return,
            realized_arithmetic_return: row.realized_arithmetic_return,
            realized_geometric_return: row.realized_geometric_return,
            // Not part of the tabular format.
            observations: 0,
        }
    }
}

/// Default download name, e.g. "AAPL_capm_summary.csv".
pub fn export_file_name(ticker: &str) -> String {
    format!("{}_capm_summary.csv", ticker)
}

/// Writes the result as a header plus one CSV row.
pub fn export_csv(result: &CapmResult) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(ExportRow::from(result))?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Reads back the first row of an export.
pub fn import_csv(data: &str) -> Result<CapmResult, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let row = reader
        .deserialize::<ExportRow>()
        .next()
        .ok_or(ExportError::Empty)??;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> CapmResult {
        CapmResult {
            ticker: "BRK-B".to_string(),
            beta: 0.873_215_004_1,
            benchmark_annual_return: 0.187_654_321,
            capm_expected_return: 0.166_3,
            realized_arithmetic_return: -0.042_1,
            realized_geometric_return: 1.0 / 3.0,
            observations: 249,
        }
    }

    #[test]
    fn header_has_exactly_the_export_columns() {
        let csv = export_csv(&result()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, EXPORT_COLUMNS.join(","));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn values_are_fractions_not_percentages() {
        let csv = export_csv(&result()).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("BRK-B,0.8732150041,0.187654321,"));
        assert!(!row.contains('%'));
    }

    #[test]
    fn export_then_import_reproduces_fields() {
        let original = result();
        let restored = import_csv(&export_csv(&original).unwrap()).unwrap();

        assert_eq!(restored.ticker, original.ticker);
        assert!((restored.beta - original.beta).abs() < 1e-15);
        assert!((restored.benchmark_annual_return - original.benchmark_annual_return).abs() < 1e-15);
        assert!((restored.capm_expected_return - original.capm_expected_return).abs() < 1e-15);
        assert!(
            (restored.realized_arithmetic_return - original.realized_arithmetic_return).abs()
                < 1e-15
        );
        assert!(
            (restored.realized_geometric_return - original.realized_geometric_return).abs()
                < 1e-15
        );
    }

    #[test]
    fn import_of_header_only_is_empty() {
        let header_only = format!("{}\n", EXPORT_COLUMNS.join(","));
        assert!(matches!(import_csv(&header_only), Err(ExportError::Empty)));
    }

    #[test]
    fn file_name_uses_ticker() {
        assert_eq!(export_file_name("AAPL"), "AAPL_capm_summary.csv");
    }
}
