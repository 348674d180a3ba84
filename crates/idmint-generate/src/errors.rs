use thiserror::Error;

/// Errors emitted by generators and the batch engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Selector(#[from] idmint_core::Error),
    #[error("invalid digits: {0}")]
    InvalidDigits(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
