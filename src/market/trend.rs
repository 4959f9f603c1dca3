use chrono::{DateTime, Duration, Utc};

/// One point of the price trend chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

/// Stamps an hourly sparkline so that the last sample lands on `end`.
///
/// Non-finite samples are dropped; the remaining points keep their original
/// hour offsets.
pub fn trend_points(prices: &[f64], end: DateTime<Utc>) -> Vec<TrendPoint> {
    let last = prices.len().saturating_sub(1);
    prices
        .iter()
        .enumerate()
        .filter(|(_, price)| price.is_finite())
        .map(|(i, &price)| TrendPoint {
            time: end - Duration::hours((last - i) as i64),
            price,
        })
        .collect()
}

/// Price range for the chart's y axis.
///
/// Flat series are padded by 1% (or 1.0 at zero) so the range is never
/// empty. Returns `None` for an empty series.
pub fn bounds(points: &[TrendPoint]) -> Option<(f64, f64)> {
    let mut iter = points.iter().map(|p| p.price);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    if max > min {
        Some((min, max))
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.01 };
        Some((min - pad, max + pad))
    }
}

/// Percentage change from the first to the last point.
pub fn change_pct(points: &[TrendPoint]) -> Option<f64> {
    let first = points.first()?.price;
    let last = points.last()?.price;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_points_are_hourly_and_end_at_now() {
        let points = trend_points(&[1.0, 2.0, 3.0], end());
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].time, end());
        assert_eq!(points[0].time, end() - Duration::hours(2));
        assert_eq!(points[1].price, 2.0);
    }

    #[test]
    fn test_non_finite_samples_dropped() {
        let points = trend_points(&[1.0, f64::NAN, 3.0], end());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, end() - Duration::hours(2));
        assert_eq!(points[1].time, end());
    }

    #[test]
    fn test_empty_series() {
        assert!(trend_points(&[], end()).is_empty());
        assert_eq!(bounds(&[]), None);
        assert_eq!(change_pct(&[]), None);
    }

    #[test]
    fn test_bounds() {
        let points = trend_points(&[5.0, 2.0, 9.0], end());
        assert_eq!(bounds(&points), Some((2.0, 9.0)));
    }

    #[test]
    fn test_flat_bounds_padded() {
        let points = trend_points(&[100.0, 100.0], end());
        assert_eq!(bounds(&points), Some((99.0, 101.0)));

        let zeros = trend_points(&[0.0], end());
        assert_eq!(bounds(&zeros), Some((-1.0, 1.0)));
    }

    #[test]
    fn test_change_pct() {
        let points = trend_points(&[50.0, 75.0], end());
        assert_eq!(change_pct(&points), Some(50.0));
        assert_eq!(change_pct(&trend_points(&[0.0, 1.0], end())), None);
    }
}
