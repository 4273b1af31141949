//! Analysis error types.
//!
//! Only fatal conditions live here, each with enough context (line number,
//! item id) for the caller to act on. Undefined variability is deliberately
//! not an error: those items travel through the pipeline with null
//! volatility fields instead of aborting the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input data could not be understood: a required column is missing,
    /// a quantity/revenue field is not numeric, or a period label does not
    /// follow the `YYYY?MM` layout. Fatal; nothing is classified.
    #[error("Input format error at line {line}: {reason}")]
    InputFormat { line: usize, reason: String },

    /// Zero records were supplied. Fatal; nothing to classify.
    #[error("Empty dataset: no sales records to classify")]
    EmptyDataset,

    /// A value escaped a bin list that the classifiers guarantee to be
    /// exhaustive. Indicates a logic defect, never user-triggerable.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for pipeline operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
