use ta::Next;
use ta::indicators::SimpleMovingAverage as Sma;

/// Trailing simple moving average over the last `window` values.
///
/// Returns `None` when smoothing is disabled (`window == 0`). Otherwise the
/// output has one entry per input value, and the first `window - 1` entries are
/// `None` because a full window is not available yet. Those must be drawn as
/// gaps, not zeros.
pub fn moving_average(values: &[f64], window: usize) -> Option<Vec<Option<f64>>> {
    // `ta` rejects a zero period, which is exactly the disabled case.
    let mut sma = Sma::new(window).ok()?;

    let smoothed = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            // The indicator reports a partial mean during warm-up; mask it.
            let mean = sma.next(value);
            (i + 1 >= window).then_some(mean)
        })
        .collect();

    Some(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_day_window_leaves_two_gaps() {
        let smoothed = moving_average(&[0.01, 0.02, 0.03, 0.04, 0.05], 3).unwrap();

        assert_eq!(smoothed.len(), 5);
        assert_eq!(smoothed[0], None);
        assert_eq!(smoothed[1], None);
        let expected = [0.02, 0.03, 0.04];
        for (got, want) in smoothed[2..].iter().zip(expected) {
            assert!((got.unwrap() - want).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_window_disables_smoothing() {
        assert!(moving_average(&[0.01, 0.02], 0).is_none());
    }

    #[test]
    fn window_of_one_is_identity() {
        let values = [0.01, -0.02, 0.005];
        let smoothed = moving_average(&values, 1).unwrap();
        for (got, want) in smoothed.iter().zip(values) {
            assert!((got.unwrap() - want).abs() < 1e-15);
        }
    }

    #[test]
    fn window_longer_than_series_is_all_gaps() {
        let smoothed = moving_average(&[0.01, 0.02], 5).unwrap();
        assert_eq!(smoothed, vec![None, None]);
    }
}
