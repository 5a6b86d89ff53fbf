use thiserror::Error;

/// Why a topic produced no result. Every variant is handled the same way by
/// the collector: log it and leave the topic out of the dataset.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("invalid URL {0}")]
    Url(String),
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no usable data: {0}")]
    NoUsableData(&'static str),
    #[error("no value column found")]
    NoValueColumn,
    #[error("no valid data points")]
    NoValidDataPoints,
    #[error("cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, TopicError>;
