//! Explicit interval binning.
//!
//! Both classifiers assign labels by walking an ordered list of
//! `(upper_bound, label)` pairs and taking the first bin whose upper bound
//! the value does not exceed. Upper bounds are inclusive; there is no lower
//! bound check, so a value at or below the first bound lands in the first
//! bin. Boundary behavior is spelled out here rather than hidden inside a
//! library cut call, so it can be tested directly.

/// An ordered list of `(upper_bound, label)` bins.
pub struct Binning<L: Copy> {
    bins: Vec<(f64, L)>,
}

impl<L: Copy> Binning<L> {
    /// Bins must be supplied in ascending upper-bound order.
    pub fn new(bins: Vec<(f64, L)>) -> Self {
        debug_assert!(
            bins.windows(2).all(|w| w[0].0 <= w[1].0),
            "bin upper bounds must be non-decreasing"
        );
        Self { bins }
    }

    /// First bin whose upper bound is `>= value`, or `None` if the value
    /// exceeds every bound (or is NaN).
    pub fn classify(&self, value: f64) -> Option<L> {
        self.bins
            .iter()
            .find(|(upper, _)| value <= *upper)
            .map(|(_, label)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_bins() -> Binning<char> {
        Binning::new(vec![(0.8, 'A'), (0.95, 'B'), (1.0, 'C')])
    }

    #[test]
    fn boundary_value_belongs_to_lower_bin() {
        let bins = abc_bins();
        assert_eq!(bins.classify(0.8), Some('A'));
        assert_eq!(bins.classify(0.95), Some('B'));
        assert_eq!(bins.classify(1.0), Some('C'));
    }

    #[test]
    fn values_between_bounds_take_next_bin() {
        let bins = abc_bins();
        assert_eq!(bins.classify(0.81), Some('B'));
        assert_eq!(bins.classify(0.96), Some('C'));
    }

    #[test]
    fn value_at_or_below_first_bound_takes_first_bin() {
        let bins = abc_bins();
        assert_eq!(bins.classify(0.0), Some('A'));
        assert_eq!(bins.classify(0.3), Some('A'));
    }

    #[test]
    fn value_above_last_bound_is_unclassified() {
        assert_eq!(abc_bins().classify(1.1), None);
    }

    #[test]
    fn nan_is_unclassified() {
        assert_eq!(abc_bins().classify(f64::NAN), None);
    }

    #[test]
    fn collapsed_bounds_resolve_to_first_bin() {
        // All bounds equal (zero-spread dataset): the boundary value lands
        // in the first bin.
        let bins = Binning::new(vec![(5.0, 'X'), (5.0, 'Y'), (5.0, 'Z')]);
        assert_eq!(bins.classify(5.0), Some('X'));
    }
}
