use thiserror::Error;

/// Errors raised while turning CSV text into records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV input has no header row")]
    MissingHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
