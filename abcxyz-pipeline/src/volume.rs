//! ABC revenue classification.
//!
//! Classic Pareto segmentation: items are sorted by total revenue
//! descending, each item's revenue share and running cumulative share are
//! computed in that order, and the cumulative share is binned against fixed
//! cutoffs (0.8 / 0.95 / 1.0, boundary values belonging to the lower
//! letter). The sorted order is the published output order.

use std::cmp::Ordering;

use crate::binning::Binning;
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{AbcClass, ItemSummary};

/// Fixed Pareto cutoffs. The last bound is open-ended so float summation
/// drift just past 1.0 cannot leave the final item unclassified.
fn abc_bins() -> Binning<AbcClass> {
    Binning::new(vec![
        (0.8, AbcClass::A),
        (0.95, AbcClass::B),
        (f64::INFINITY, AbcClass::C),
    ])
}

/// Sort by revenue descending, compute shares, and assign ABC classes
/// in place. Ties break by item id ascending so the result is
/// deterministic; NaN revenues sort to the end so they never float to
/// the top of the output.
///
/// Shares are taken against the signed grand total. An item whose returns
/// outweigh its sales has a negative share, so the running cumulative can
/// exceed 1.0 mid-stream and is only guaranteed non-decreasing when every
/// per-item total is non-negative; it still lands back at 1.0 on the last
/// item, and classification stays deterministic.
pub fn classify_volume(summaries: &mut [ItemSummary]) -> AnalysisResult<()> {
    summaries.sort_by(|a, b| {
        match (a.total_revenue.is_nan(), b.total_revenue.is_nan()) {
            (true, true) => a.item_id.cmp(&b.item_id),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b
                .total_revenue
                .partial_cmp(&a.total_revenue)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.item_id.cmp(&b.item_id)),
        }
    });

    let grand_total: f64 = summaries.iter().map(|s| s.total_revenue).sum();
    if grand_total <= 0.0 {
        log::warn!(
            "grand total revenue is {}; every item takes a zero share and class A",
            grand_total
        );
    }

    let bins = abc_bins();
    let mut cumulative = 0.0;
    for summary in summaries.iter_mut() {
        summary.revenue_share = if grand_total > 0.0 {
            summary.total_revenue / grand_total
        } else {
            0.0
        };
        cumulative += summary.revenue_share;
        summary.cumulative_share = cumulative;
        let class = bins.classify(cumulative).ok_or_else(|| {
            AnalysisError::InternalConsistency(format!(
                "cumulative share {} for item '{}' escaped the ABC bins",
                cumulative, summary.item_id
            ))
        })?;
        summary.abc_class = Some(class);
    }

    log::info!(
        "ABC classification over {} items, grand total revenue {:.2}",
        summaries.len(),
        grand_total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MonthlySeries;

    fn summary_with_revenue(item: &str, revenue: f64) -> ItemSummary {
        let mut summary = ItemSummary::new(item.into(), MonthlySeries::new());
        summary.total_revenue = revenue;
        summary
    }

    #[test]
    fn sorts_by_revenue_descending() {
        let mut summaries = vec![
            summary_with_revenue("low", 10.0),
            summary_with_revenue("high", 100.0),
            summary_with_revenue("mid", 50.0),
        ];
        classify_volume(&mut summaries).unwrap();
        let order: Vec<&str> = summaries.iter().map(|s| s.item_id.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn revenue_ties_break_by_item_id() {
        let mut summaries = vec![
            summary_with_revenue("b", 10.0),
            summary_with_revenue("a", 10.0),
        ];
        classify_volume(&mut summaries).unwrap();
        assert_eq!(summaries[0].item_id, "a");
    }

    #[test]
    fn shares_sum_to_one_and_cumulative_is_non_decreasing() {
        let mut summaries = vec![
            summary_with_revenue("a", 60.0),
            summary_with_revenue("b", 30.0),
            summary_with_revenue("c", 10.0),
        ];
        classify_volume(&mut summaries).unwrap();
        let total: f64 = summaries.iter().map(|s| s.revenue_share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for pair in summaries.windows(2) {
            assert!(pair[1].cumulative_share >= pair[0].cumulative_share);
        }
        assert!((summaries.last().unwrap().cumulative_share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cumulative_share_exactly_at_cutoff_keeps_lower_class() {
        // Shares 0.8 / 0.1 / 0.1: the first item sits exactly on the A
        // boundary, the next is the first to exceed it.
        let mut summaries = vec![
            summary_with_revenue("a", 80.0),
            summary_with_revenue("b", 10.0),
            summary_with_revenue("c", 10.0),
        ];
        classify_volume(&mut summaries).unwrap();
        assert_eq!(summaries[0].abc_class, Some(AbcClass::A));
        assert_eq!(summaries[1].abc_class, Some(AbcClass::B));
        assert_eq!(summaries[2].abc_class, Some(AbcClass::C));
    }

    #[test]
    fn single_item_takes_full_share_and_class_c() {
        let mut summaries = vec![summary_with_revenue("only", 42.0)];
        classify_volume(&mut summaries).unwrap();
        assert!((summaries[0].revenue_share - 1.0).abs() < 1e-9);
        assert_eq!(summaries[0].abc_class, Some(AbcClass::C));
    }

    #[test]
    fn negative_revenue_item_gives_non_monotone_cumulative() {
        // Returns outweighing sales: the cumulative overshoots 1.0 before
        // the negative share pulls it back, but every item still classifies
        // and the last cumulative is 1.0.
        let mut summaries = vec![
            summary_with_revenue("a", 100.0),
            summary_with_revenue("b", 50.0),
            summary_with_revenue("c", -50.0),
        ];
        classify_volume(&mut summaries).unwrap();
        assert!(summaries[1].cumulative_share > 1.0);
        assert!((summaries[2].cumulative_share - 1.0).abs() < 1e-9);
        for summary in &summaries {
            assert!(summary.abc_class.is_some());
        }
    }

    #[test]
    fn zero_grand_total_yields_zero_shares_and_class_a() {
        let mut summaries = vec![
            summary_with_revenue("a", 0.0),
            summary_with_revenue("b", 0.0),
        ];
        classify_volume(&mut summaries).unwrap();
        for summary in &summaries {
            assert!((summary.revenue_share - 0.0).abs() < 1e-12);
            assert_eq!(summary.abc_class, Some(AbcClass::A));
        }
    }
}
