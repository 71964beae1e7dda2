use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Entry description must not be empty")]
    EmptyDescription,
    #[error("Entry value must be a positive finite number, got {0}")]
    InvalidValue(f64),
    #[error("Entry value is not a number: `{0}`")]
    UnparsableValue(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
