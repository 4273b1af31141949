//! ABC/XYZ inventory classification pipeline.
//!
//! Classifies inventory items by sales behavior along two independent axes:
//! revenue concentration (ABC, Pareto cumulative-share cutoffs) and demand
//! volatility (XYZ, data-relative coefficient-of-variation thresholds), and
//! maps the combined class to one of four recommended actions.
//!
//! The pipeline is a one-shot batch transform over a complete, static
//! dataset. Stages, in dependency order:
//!
//! 1. loader / record normalizer — typed `SalesRecord`s, period slicing
//! 2. monthly aggregator — dense zero-filled item × month matrix
//! 3. variability classifier — CV and derived XYZ thresholds
//! 4. volume classifier — revenue ranking and ABC cutoffs
//! 5. recommendation mapper — the fixed 3×3 action table

pub mod aggregate;
pub mod binning;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod recommend;
pub mod record;
pub mod report;
pub mod stats;
pub mod types;
pub mod variability;
pub mod volume;

pub use error::{AnalysisError, AnalysisResult};
pub use loader::{load_sales, load_sales_file, ColumnAliases};
pub use pipeline::{run_analysis, run_analysis_csv, AnalysisOutcome};
pub use report::{write_report, write_report_file};
pub use types::{AbcClass, ItemSummary, Recommendation, SalesRecord, XyzClass};
pub use variability::XyzThresholds;
