use thiserror::Error;

/// Errors raised while fetching or decoding points of interest.
#[derive(Debug, Error)]
pub enum PoiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {index} is invalid: {reason}")]
    InvalidRecord {
        index:  usize,
        reason: String,
    },
}

pub type PoiResult<T> = Result<T, PoiError>;
