//! XYZ volatility classification.
//!
//! Each item's coefficient of variation is computed over its dense monthly
//! series, then binned against thresholds derived from the observed range of
//! finite CVs in the current dataset. The thresholds are data-relative, not
//! fixed constants: the same absolute CV can land in a different class on a
//! different dataset.
//!
//! Items whose CV is undefined (fewer than two months, non-positive mean)
//! are excluded from threshold derivation and carried through with a null
//! volatility class — they still receive an ABC class downstream.

use rayon::prelude::*;

use crate::binning::Binning;
use crate::error::{AnalysisError, AnalysisResult};
use crate::stats::coefficient_of_variation;
use crate::types::{ItemSummary, XyzClass};

/// Thresholds derived per run from the dataset's finite CVs.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct XyzThresholds {
    pub min_cv: f64,
    pub max_cv: f64,
    pub threshold_x: f64,
    pub threshold_y: f64,
    pub threshold_z: f64,
}

impl XyzThresholds {
    /// X at 30% and Y at 60% of the observed spread; Z at the maximum.
    /// A zero-spread dataset collapses all three onto one point, which the
    /// ordered bins resolve to X.
    fn from_range(min_cv: f64, max_cv: f64) -> Self {
        let spread = max_cv - min_cv;
        Self {
            min_cv,
            max_cv,
            threshold_x: min_cv + 0.3 * spread,
            threshold_y: min_cv + 0.6 * spread,
            threshold_z: max_cv,
        }
    }

    fn bins(&self) -> Binning<XyzClass> {
        Binning::new(vec![
            (self.threshold_x, XyzClass::X),
            (self.threshold_y, XyzClass::Y),
            (self.threshold_z, XyzClass::Z),
        ])
    }
}

/// Compute per-item CVs, derive thresholds, and assign XYZ classes in place.
///
/// Returns `None` (with every `xyz_class` left unset) when no item has a
/// finite CV — there is no range to derive thresholds from.
pub fn classify_variability(
    summaries: &mut [ItemSummary],
) -> AnalysisResult<Option<XyzThresholds>> {
    // Items are disjoint, so the CV pass parallelizes cleanly.
    summaries.par_iter_mut().for_each(|summary| {
        let values: Vec<f64> = summary.monthly_series.values().copied().collect();
        summary.cv = coefficient_of_variation(&values);
    });

    let finite: Vec<f64> = summaries.iter().filter_map(|s| s.cv).collect();
    let undefined = summaries.len() - finite.len();
    if undefined > 0 {
        log::warn!(
            "{} of {} items have undefined variability and keep a null XYZ class",
            undefined,
            summaries.len()
        );
    }
    if finite.is_empty() {
        log::warn!("no finite CV values; skipping XYZ classification");
        return Ok(None);
    }

    let min_cv = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max_cv = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let thresholds = XyzThresholds::from_range(min_cv, max_cv);
    log::info!(
        "XYZ thresholds: min={:.3} x={:.3} y={:.3} z={:.3}",
        thresholds.min_cv,
        thresholds.threshold_x,
        thresholds.threshold_y,
        thresholds.threshold_z
    );

    let bins = thresholds.bins();
    for summary in summaries.iter_mut() {
        if let Some(cv) = summary.cv {
            let class = bins.classify(cv).ok_or_else(|| {
                AnalysisError::InternalConsistency(format!(
                    "CV {} for item '{}' escaped the XYZ bins",
                    cv, summary.item_id
                ))
            })?;
            summary.xyz_class = Some(class);
        }
    }
    Ok(Some(thresholds))
}
