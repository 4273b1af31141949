//! Pipeline entry points.
//!
//! A run is a one-shot batch transform: aggregate, classify variability,
//! classify volume, map recommendations. The variability and volume stages
//! operate on disjoint fields of the completed summary set and could run in
//! either order; they run variability-first here.

use std::io::{Read, Write};

use crate::aggregate::aggregate_monthly;
use crate::error::AnalysisResult;
use crate::loader::{load_sales, ColumnAliases};
use crate::recommend::map_recommendations;
use crate::report::write_report;
use crate::types::{ItemSummary, SalesRecord};
use crate::variability::{classify_variability, XyzThresholds};
use crate::volume::classify_volume;

/// Everything a run produces: the classified summaries in output order and
/// the per-run derived thresholds (`None` when no item had a finite CV).
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub summaries: Vec<ItemSummary>,
    pub thresholds: Option<XyzThresholds>,
}

/// Run the full classification over an in-memory record sequence.
pub fn run_analysis(records: &[SalesRecord]) -> AnalysisResult<AnalysisOutcome> {
    let mut summaries = aggregate_monthly(records)?;
    let thresholds = classify_variability(&mut summaries)?;
    classify_volume(&mut summaries)?;
    map_recommendations(&mut summaries)?;
    Ok(AnalysisOutcome {
        summaries,
        thresholds,
    })
}

/// Run the full classification between an input and an output collaborator:
/// read sales rows from `input` (headers mapped through `aliases`), classify,
/// and persist the result table to `output`.
pub fn run_analysis_csv<R: Read, W: Write>(
    input: R,
    output: W,
    aliases: &ColumnAliases,
) -> AnalysisResult<AnalysisOutcome> {
    let records = load_sales(input, aliases)?;
    let outcome = run_analysis(&records)?;
    write_report(output, &outcome.summaries)?;
    Ok(outcome)
}
