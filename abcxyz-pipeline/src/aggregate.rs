//! Monthly aggregation of sales records into per-item summaries.
//!
//! Quantities are grouped by (item, year, month) and then pivoted onto
//! month-of-year, summing across years. The month domain of every series is
//! the union of all months observed for any item; months an item was silent
//! in are filled with zero. Computing variability over a ragged series would
//! bias CV toward items with fewer active months, so the zero-fill is part
//! of the contract, not a convenience.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{ItemSummary, MonthlySeries, PeriodKey, SalesRecord};

/// Per-item accumulator while grouping.
#[derive(Default)]
struct ItemAccumulator {
    /// Quantity grouped by (year, month); collapsed to month-of-year when
    /// the series is published.
    by_period: BTreeMap<PeriodKey, f64>,
    total_revenue: f64,
}

/// Aggregate records into one `ItemSummary` per distinct item id.
///
/// Returns summaries in item-id order; the volume classifier re-sorts by
/// revenue later. The output item set equals exactly the distinct item ids
/// in the input — no item is dropped or duplicated.
pub fn aggregate_monthly(records: &[SalesRecord]) -> AnalysisResult<Vec<ItemSummary>> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut items: BTreeMap<&str, ItemAccumulator> = BTreeMap::new();
    let mut month_domain: BTreeSet<String> = BTreeSet::new();

    for (idx, record) in records.iter().enumerate() {
        let key = record
            .period_key()
            .map_err(|reason| AnalysisError::InputFormat {
                line: idx + 1,
                reason,
            })?;
        month_domain.insert(key.month.clone());

        let acc = items.entry(record.item_id.as_str()).or_default();
        *acc.by_period.entry(key).or_insert(0.0) += record.quantity;
        acc.total_revenue += record.revenue;
    }

    let summaries: Vec<ItemSummary> = items
        .into_iter()
        .map(|(item_id, acc)| {
            // Dense month-of-year series over the union domain, summing a
            // month's quantity across all years it appears in.
            let mut series = MonthlySeries::new();
            for month in &month_domain {
                series.insert(month.clone(), 0.0);
            }
            for (key, qty) in &acc.by_period {
                if let Some(slot) = series.get_mut(&key.month) {
                    *slot += qty;
                }
            }
            let mut summary = ItemSummary::new(item_id.to_string(), series);
            summary.total_revenue = acc.total_revenue;
            summary
        })
        .collect();

    log::info!(
        "aggregated {} records into {} items over {} months",
        records.len(),
        summaries.len(),
        month_domain.len()
    );
    Ok(summaries)
}

/// The (sorted) month domain shared by every summary. Empty for an empty set.
pub fn month_domain(summaries: &[ItemSummary]) -> Vec<String> {
    summaries
        .first()
        .map(|s| s.monthly_series.keys().cloned().collect())
        .unwrap_or_default()
}
