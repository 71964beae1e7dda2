use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, LedgerResult};

/// Controls whether a ledger checks entries before accepting them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Rejects blank descriptions and values that are not finite and positive.
    #[default]
    Strict,
    /// Accepts whatever the caller supplies.
    Trusting,
}

impl ValidationPolicy {
    pub fn check(self, description: &str, value: f64) -> LedgerResult<()> {
        match self {
            ValidationPolicy::Strict => validate_entry(description, value),
            ValidationPolicy::Trusting => Ok(()),
        }
    }
}

/// Checks the entry preconditions shared by the ledger and its controller.
pub fn validate_entry(description: &str, value: f64) -> LedgerResult<()> {
    if description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    if !value.is_finite() || value <= 0.0 {
        return Err(LedgerError::InvalidValue(value));
    }
    Ok(())
}
