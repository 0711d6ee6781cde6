use core_types::{AlignedReturns, AlignedRow, PriceSeries, ReturnPoint, ReturnSeries};
use std::cmp::Ordering;

/// Simple percentage change between consecutive closes.
///
/// The first observation has no predecessor and is dropped. A step whose prior
/// close is zero or not finite, or whose return is not finite, is dropped as
/// well, so every returned value is finite. Fewer than two prices give an empty
/// series rather than an error.
pub fn daily_returns(prices: &PriceSeries) -> ReturnSeries {
    let points: Vec<ReturnPoint> = prices
        .points()
        .windows(2)
        .filter_map(|w| {
            let (prev, curr) = (w[0].close, w[1].close);
            if prev == 0.0 || !prev.is_finite() {
                return None;
            }
            let value = (curr - prev) / prev;
            value.is_finite().then_some(ReturnPoint {
                date: w[1].date,
                value,
            })
        })
        .collect();

    let dropped = prices.len().saturating_sub(1) - points.len();
    if dropped > 0 {
        tracing::debug!(
            symbol = %prices.symbol,
            dropped,
            "Dropped non-finite daily returns."
        );
    }

    ReturnSeries::new(points)
}

/// Inner-joins two return series on date.
///
/// Both inputs are ordered by strictly increasing date, so a single merge pass
/// yields the intersection in ascending order.
pub fn align(asset: &ReturnSeries, benchmark: &ReturnSeries) -> AlignedReturns {
    let (a, b) = (&asset.points, &benchmark.points);
    let mut rows = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].date.cmp(&b[j].date) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                rows.push(AlignedRow {
                    date: a[i].date,
                    asset: a[i].value,
                    benchmark: b[j].value,
                });
                i += 1;
                j += 1;
            }
        }
    }

    AlignedReturns::new(rows)
}
