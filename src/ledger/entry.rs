use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Partition of ledger entries. Each kind owns its own id sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    #[serde(rename = "inc")]
    Income,
    #[serde(rename = "exp")]
    Expense,
}

impl EntryKind {
    /// Short tag used in entry references (`inc-0`, `exp-3`).
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Income => "inc",
            EntryKind::Expense => "exp",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" => Ok(EntryKind::Income),
            "exp" | "expense" => Ok(EntryKind::Expense),
            other => Err(LedgerError::InvalidRef(format!(
                "unknown entry kind `{}`",
                other
            ))),
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: u64,
    pub description: String,
    pub value: f64,
}

impl Entry {
    pub fn new(id: u64, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
        }
    }
}

/// Addresses one entry inside a ledger. Renders as `<tag>-<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryRef {
    pub kind: EntryKind,
    pub id: u64,
}

impl EntryRef {
    pub fn new(kind: EntryKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.tag(), self.id)
    }
}

impl FromStr for EntryRef {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (tag, raw_id) = value
            .trim()
            .split_once('-')
            .ok_or_else(|| LedgerError::InvalidRef(format!("malformed entry ref `{}`", value)))?;
        let kind = tag.parse::<EntryKind>()?;
        let malformed_id = || LedgerError::InvalidRef(format!("malformed entry id `{}`", raw_id));
        let canonical = !raw_id.is_empty()
            && raw_id.bytes().all(|byte| byte.is_ascii_digit())
            && (raw_id == "0" || !raw_id.starts_with('0'));
        if !canonical {
            return Err(malformed_id());
        }
        let id = raw_id.parse::<u64>().map_err(|_| malformed_id())?;
        Ok(Self { kind, id })
    }
}
