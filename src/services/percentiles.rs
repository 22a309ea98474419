/// Percentile helpers for already-sorted slices.
///
/// - Empty input => `None` (or `0.0` for the convenience wrapper).
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.
/// - Otherwise we compute a position within `[0, len-1]` and linearly
///   interpolate between the two neighboring order statistics.

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }

    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.last().copied();
    }

    let position = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(sorted_values.len() - 1);
    let fraction = position - lower as f64;

    Some(sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction)
}

/// Convenience wrapper that maps empty input to `0.0`.
pub fn value_sorted_or_zero(sorted_values: &[f64], percentile: f64) -> f64 {
    value_sorted(sorted_values, percentile).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_sorted_returns_none_for_empty_input() {
        let values: [f64; 0] = [];
        assert_eq!(value_sorted(&values, 50.0), None);
    }

    #[test]
    fn value_sorted_clamps_to_first_and_last() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(value_sorted(&values, -1.0), Some(10.0));
        assert_eq!(value_sorted(&values, 0.0), Some(10.0));
        assert_eq!(value_sorted(&values, 100.0), Some(30.0));
        assert_eq!(value_sorted(&values, 1000.0), Some(30.0));
    }

    #[test]
    fn value_sorted_hits_order_statistics_exactly() {
        // len=5 => positions 0..=4
        // p25 => position=1.0, p50 => 2.0, p75 => 3.0
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(value_sorted(&values, 25.0), Some(1.0));
        assert_eq!(value_sorted(&values, 50.0), Some(2.0));
        assert_eq!(value_sorted(&values, 75.0), Some(3.0));
    }

    #[test]
    fn value_sorted_interpolates_between_neighbors() {
        let values = [10.0, 20.0];
        assert_eq!(value_sorted(&values, 50.0), Some(15.0));

        let values = [0.0, 1.0, 2.0, 3.0];
        // p50 => position=1.5 => halfway between 1.0 and 2.0
        assert_eq!(value_sorted(&values, 50.0), Some(1.5));
        // p10 => position=0.3
        let p10 = value_sorted(&values, 10.0).unwrap();
        assert!((p10 - 0.3).abs() < 1e-12);
    }

    #[test]
    fn value_sorted_or_zero_returns_zero_for_empty_input() {
        let values: [f64; 0] = [];
        assert_eq!(value_sorted_or_zero(&values, 50.0), 0.0);
    }
}
