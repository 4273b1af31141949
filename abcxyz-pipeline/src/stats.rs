//! Descriptive statistics for the monthly quantity series.

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divisor n−1).
/// `None` when fewer than two values exist.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Coefficient of variation in percent: `stddev / mean × 100`.
///
/// Undefined (`None`) when the sample standard deviation is undefined or
/// the mean is not positive — a zero mean has no meaningful relative
/// dispersion, and a negative mean (returns outweighing sales) would
/// produce a negative CV that the volatility bins cannot interpret.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let std_dev = sample_std_dev(values)?;
    let m = mean(values);
    if m <= 0.0 {
        return None;
    }
    Some(std_dev / m * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_values() {
        assert!((mean(&[50.0, 150.0]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        // ((50-100)^2 + (150-100)^2) / 1 = 5000, sqrt = 70.7106...
        let sd = sample_std_dev(&[50.0, 150.0]).unwrap();
        assert!((sd - 5000f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn std_dev_undefined_for_single_value() {
        assert!(sample_std_dev(&[42.0]).is_none());
    }

    #[test]
    fn cv_of_flat_series_is_zero() {
        let cv = coefficient_of_variation(&[100.0, 100.0]).unwrap();
        assert!(cv.abs() < 1e-9);
    }

    #[test]
    fn cv_matches_hand_computation() {
        let cv = coefficient_of_variation(&[50.0, 150.0]).unwrap();
        assert!((cv - 70.71067811865476).abs() < 1e-9);
    }

    #[test]
    fn cv_undefined_for_zero_mean() {
        assert!(coefficient_of_variation(&[0.0, 0.0]).is_none());
    }

    #[test]
    fn cv_undefined_for_negative_mean() {
        assert!(coefficient_of_variation(&[-10.0, -20.0]).is_none());
    }
}
