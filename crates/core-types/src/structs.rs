use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single adjusted close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// The adjusted close history of one symbol, ordered by strictly increasing date.
///
/// This is the only shape a market-data provider hands to the rest of the system.
/// Whatever the upstream response looks like, it is normalized into a `PriceSeries`
/// at the provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPriceSeries")]
pub struct PriceSeries {
    pub symbol: String,
    points: Vec<PricePoint>,
}

// Deserialized input goes through `PriceSeries::new` so ordering always holds.
#[derive(Deserialize)]
struct RawPriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl From<RawPriceSeries> for PriceSeries {
    fn from(raw: RawPriceSeries) -> Self {
        PriceSeries::new(raw.symbol, raw.points)
    }
}

impl PriceSeries {
    /// Builds a series from unordered points.
    ///
    /// Points are sorted by date. When a date appears more than once the last
    /// occurrence in the input wins, so the resulting dates are strictly increasing.
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        // Stable sort keeps input order among equal dates.
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self {
            symbol: symbol.into(),
            points: deduped,
        }
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A single fractional daily return, e.g. 0.01 for +1%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Simple daily returns derived from a `PriceSeries`. Values are always finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    pub fn new(points: Vec<ReturnPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// The last `n` observations (all of them when `n` exceeds the length).
    pub fn tail(&self, n: usize) -> ReturnSeries {
        let start = self.points.len().saturating_sub(n);
        ReturnSeries::new(self.points[start..].to_vec())
    }
}

/// One date on which both the asset and the benchmark have a return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub asset: f64,
    pub benchmark: f64,
}

/// Asset and benchmark returns inner-joined on date, ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedReturns {
    pub rows: Vec<AlignedRow>,
}

impl AlignedReturns {
    pub fn new(rows: Vec<AlignedRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    pub fn asset_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.asset).collect()
    }

    pub fn benchmark_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.benchmark).collect()
    }

    /// The last `n` aligned rows, used for the lookback window of the charts.
    pub fn tail(&self, n: usize) -> AlignedReturns {
        let start = self.rows.len().saturating_sub(n);
        AlignedReturns::new(self.rows[start..].to_vec())
    }
}
