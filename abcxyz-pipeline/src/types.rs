use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// A single normalized sales row. Immutable once created by the loader;
/// feeds aggregation unchanged (negative quantities/revenue are allowed —
/// the source data permits returns and adjustments).
#[derive(Clone, Debug, Serialize)]
pub struct SalesRecord {
    pub item_id: String,
    /// Period label encoding year and month, e.g. `"2023-04"`.
    pub period: String,
    pub quantity: f64,
    pub revenue: f64,
}

/// Year/month aggregation key derived from a period label by fixed slicing.
/// Used only while grouping; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodKey {
    /// 4-digit year, characters 0–3 of the label.
    pub year: String,
    /// 2-digit month, characters 5–6 of the label.
    pub month: String,
}

/// Dense per-item series: month-of-year (`"01"`..`"12"`) to summed quantity.
/// Covers every month observed anywhere in the dataset, zero-filled where
/// the item had no activity, so variability statistics are comparable
/// across items.
pub type MonthlySeries = BTreeMap<String, f64>;

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// Demand volatility class, binned from the coefficient of variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum XyzClass {
    X,
    Y,
    Z,
}

impl fmt::Display for XyzClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XyzClass::X => write!(f, "X"),
            XyzClass::Y => write!(f, "Y"),
            XyzClass::Z => write!(f, "Z"),
        }
    }
}

/// Revenue concentration class, binned from cumulative revenue share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbcClass::A => write!(f, "A"),
            AbcClass::B => write!(f, "B"),
            AbcClass::C => write!(f, "C"),
        }
    }
}

/// Action recommended for an item based on its combined class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Keep,
    Control,
    Optimize,
    Drop,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Keep => write!(f, "KEEP"),
            Recommendation::Control => write!(f, "CONTROL"),
            Recommendation::Optimize => write!(f, "OPTIMIZE"),
            Recommendation::Drop => write!(f, "DROP"),
        }
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Per-item analysis result. One instance per distinct item id in the input;
/// created by the aggregator, then populated field by field as the
/// classification stages run. Lives for the duration of a single run.
#[derive(Clone, Debug, Serialize)]
pub struct ItemSummary {
    pub item_id: String,
    pub monthly_series: MonthlySeries,
    pub total_revenue: f64,
    pub total_quantity: f64,

    /// Coefficient of variation of the monthly series, in percent.
    /// `None` when undefined (fewer than two months, or non-positive mean).
    pub cv: Option<f64>,
    /// `None` when the CV is undefined; the item still carries its ABC class.
    pub xyz_class: Option<XyzClass>,

    pub revenue_share: f64,
    pub cumulative_share: f64,
    /// Populated by the volume classifier.
    pub abc_class: Option<AbcClass>,

    /// `"<ABC>-<XYZ>"`, e.g. `"A-X"`. `None` when the XYZ class is undefined.
    pub combined_class: Option<String>,
    pub recommendation: Option<Recommendation>,
}

impl ItemSummary {
    /// A fresh summary with only the aggregation fields filled in.
    pub fn new(item_id: String, monthly_series: MonthlySeries) -> Self {
        let total_quantity = monthly_series.values().sum();
        Self {
            item_id,
            monthly_series,
            total_revenue: 0.0,
            total_quantity,
            cv: None,
            xyz_class: None,
            revenue_share: 0.0,
            cumulative_share: 0.0,
            abc_class: None,
            combined_class: None,
            recommendation: None,
        }
    }
}
