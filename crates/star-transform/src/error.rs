use thiserror::Error;

/// Failures that abort a whole run.
///
/// Per-record problems (bad dates, bad measures, join misses) never show up
/// here; they are absorbed into the [`BuildReport`](crate::BuildReport).
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("sales feed contains no records")]
    EmptyInput,
    #[error("fact worker for partition {partition} panicked")]
    WorkerPanicked { partition: usize },
    #[error("dataframe conversion failed: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
