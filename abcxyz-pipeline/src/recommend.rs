//! The 3×3 recommendation table.
//!
//! The combined class is the ABC and XYZ letters joined with a dash; the
//! table below maps all nine combinations to one of four actions. The
//! mapping is an exhaustive match over the two class enums, so totality is
//! checked by the compiler instead of guarded at runtime.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{AbcClass, ItemSummary, Recommendation, XyzClass};

impl Recommendation {
    /// Fixed 9-entry lookup:
    ///
    /// | Combined        | Action   |
    /// |-----------------|----------|
    /// | A-X, A-Y, B-X   | KEEP     |
    /// | A-Z, B-Y        | CONTROL  |
    /// | B-Z, C-X, C-Y   | OPTIMIZE |
    /// | C-Z             | DROP     |
    pub fn for_classes(abc: AbcClass, xyz: XyzClass) -> Recommendation {
        use AbcClass::*;
        use XyzClass::*;
        match (abc, xyz) {
            (A, X) | (A, Y) | (B, X) => Recommendation::Keep,
            (A, Z) | (B, Y) => Recommendation::Control,
            (B, Z) | (C, X) | (C, Y) => Recommendation::Optimize,
            (C, Z) => Recommendation::Drop,
        }
    }
}

/// Fill in combined class and recommendation for every summary.
///
/// Items without an XYZ class (undefined variability) keep a null combined
/// class and recommendation. A missing ABC class means the volume stage has
/// not run, which is a logic defect.
pub fn map_recommendations(summaries: &mut [ItemSummary]) -> AnalysisResult<()> {
    for summary in summaries.iter_mut() {
        let abc = summary.abc_class.ok_or_else(|| {
            AnalysisError::InternalConsistency(format!(
                "item '{}' has no ABC class; volume classification must run first",
                summary.item_id
            ))
        })?;
        if let Some(xyz) = summary.xyz_class {
            summary.combined_class = Some(format!("{}-{}", abc, xyz));
            summary.recommendation = Some(Recommendation::for_classes(abc, xyz));
        }
    }
    Ok(())
}
