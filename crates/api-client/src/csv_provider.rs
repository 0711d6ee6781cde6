use crate::error::ApiError;
use crate::range::HistoryRange;
use crate::MarketDataProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{PricePoint, PriceSeries};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const NAMES_FILE: &str = "names.csv";

/// A `MarketDataProvider` that reads `<dir>/<SYMBOL>.csv` files.
///
/// Each file needs `date` (YYYY-MM-DD) and `close` columns; an `adj_close`
/// column, when present and filled, takes precedence. Other columns are
/// ignored. Display names come from an optional `<dir>/names.csv` with
/// `symbol,name` columns.
#[derive(Debug, Clone)]
pub struct CsvDirectoryProvider {
    dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: NaiveDate,
    close: Option<f64>,
    #[serde(default)]
    adj_close: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NameRow {
    symbol: String,
    name: String,
}

impl CsvDirectoryProvider {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn symbol_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol))
    }

    /// Parses price rows, skipping rows with no usable price.
    pub fn parse_prices(symbol: &str, data: &[u8]) -> Result<PriceSeries, ApiError> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(data);

        let mut points = Vec::new();
        for row in rdr.deserialize::<PriceRow>() {
            let row = row?;
            if let Some(close) = row.adj_close.or(row.close) {
                points.push(PricePoint {
                    date: row.date,
                    close,
                });
            }
        }

        Ok(PriceSeries::new(symbol, points))
    }
}

#[async_trait]
impl MarketDataProvider for CsvDirectoryProvider {
    async fn fetch_prices(
        &self,
        symbol: &str,
        range: &HistoryRange,
    ) -> Result<PriceSeries, ApiError> {
        let path = self.symbol_path(symbol);
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ApiError::InvalidSymbol(symbol.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let series = Self::parse_prices(symbol, &data)?;
        let Some(last) = series.points().last().map(|p| p.date) else {
            return Ok(series);
        };

        let series = match range.start_from(last) {
            Some(start) => PriceSeries::new(
                symbol,
                series
                    .points()
                    .iter()
                    .copied()
                    .filter(|p| p.date >= start)
                    .collect(),
            ),
            None => series,
        };

        tracing::info!(symbol, path = %path.display(), points = series.len(), "Loaded price history.");
        Ok(series)
    }

    async fn fetch_display_name(&self, symbol: &str) -> Result<Option<String>, ApiError> {
        let data = match tokio::fs::read(self.dir.join(NAMES_FILE)).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());
        for row in rdr.deserialize::<NameRow>() {
            let row = row?;
            if row.symbol.eq_ignore_ascii_case(symbol) {
                return Ok(Some(row.name));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("capm-csv-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn parses_adjusted_closes_and_skips_blanks() {
        let data = b"date,open,close,adj_close\n\
2024-01-03,1,10.5,10.0\n\
2024-01-02,1,9.5,\n\
2024-01-04,1,,\n";
        let series = CsvDirectoryProvider::parse_prices("TEST", data).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].close, 9.5);
        assert_eq!(series.points()[1].close, 10.0);
    }

    #[tokio::test]
    async fn trims_history_to_the_requested_range() {
        let dir = fixture_dir("range");
        std::fs::write(
            dir.join("ACME.csv"),
            "date,close\n2024-01-01,1\n2024-06-01,2\n2024-06-10,3\n2024-06-14,4\n",
        )
        .unwrap();
        let provider = CsvDirectoryProvider::new(&dir);

        let all = provider.fetch_prices("ACME", &HistoryRange::Max).await.unwrap();
        let recent = provider.fetch_prices("ACME", &HistoryRange::Days(5)).await.unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(all.len(), 4);
        assert_eq!(recent.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_invalid_symbol() {
        let dir = fixture_dir("missing");
        let provider = CsvDirectoryProvider::new(&dir);

        let result = provider.fetch_prices("NOPE", &HistoryRange::default()).await;
        let name = provider.fetch_display_name("NOPE").await.unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert!(matches!(result, Err(ApiError::InvalidSymbol(_))));
        assert_eq!(name, None);
    }

    #[tokio::test]
    async fn looks_up_display_names() {
        let dir = fixture_dir("names");
        std::fs::write(dir.join(NAMES_FILE), "symbol,name\nACME,Acme Corp\n").unwrap();
        let provider = CsvDirectoryProvider::new(&dir);

        let found = provider.fetch_display_name("acme").await.unwrap();
        let missing = provider.fetch_display_name("XYZ").await.unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(found.as_deref(), Some("Acme Corp"));
        assert_eq!(missing, None);
    }
}
