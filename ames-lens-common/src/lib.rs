pub mod config;
pub use config::{BinningConfig, BoxPlotConfig, Config};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmesLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid bin edges: {0}")]
    InvalidBinEdges(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AmesLensError>;

/// Provenance of a loaded dataset: where it came from and how many rows
/// survived validation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatasetInfo {
    pub path: String,
    pub row_count: usize,
    pub skipped_rows: usize,
}
