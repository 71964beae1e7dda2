//! Orchestration between raw user input and a [`Ledger`].
//!
//! Every mutation through the controller is followed by a recompute, so the
//! aggregates it hands back always reflect the ledger contents.

use crate::{
    config::Config,
    errors::{LedgerError, LedgerResult},
    ledger::{validate_entry, Aggregates, Entry, EntryKind, EntryRef, Ledger},
};

/// Raw form fields for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub value: String,
}

impl EntryInput {
    pub fn new(kind: EntryKind, description: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            value: value.into(),
        }
    }

    fn parsed_value(&self) -> LedgerResult<f64> {
        let raw = self.value.trim();
        raw.parse::<f64>()
            .map_err(|_| LedgerError::UnparsableValue(raw.to_string()))
    }
}

/// Result of a successful add: the stored entry and the refreshed summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub kind: EntryKind,
    pub entry: Entry,
    pub aggregates: Aggregates,
}

impl Update {
    pub fn entry_ref(&self) -> EntryRef {
        EntryRef::new(self.kind, self.entry.id)
    }
}

/// Result of a delete; `removed` is `None` when the id was not present.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub removed: Option<Entry>,
    pub aggregates: Aggregates,
}

#[derive(Debug)]
pub struct BudgetController {
    ledger: Ledger,
}

impl BudgetController {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Ledger::with_policy(
            config.ledger_name.clone(),
            config.validation,
        ))
    }

    /// Summary shown before any entry exists.
    pub fn initial_aggregates() -> Aggregates {
        Aggregates::default()
    }

    pub fn add(&mut self, input: &EntryInput) -> LedgerResult<Update> {
        let value = input.parsed_value().and_then(|value| {
            validate_entry(&input.description, value)?;
            Ok(value)
        });
        let value = match value {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(kind = %input.kind, error = %err, "rejected entry input");
                return Err(err);
            }
        };

        let entry = self
            .ledger
            .add_entry(input.kind, input.description.trim(), value)?;
        Ok(Update {
            kind: input.kind,
            entry,
            aggregates: self.refresh(),
        })
    }

    pub fn delete(&mut self, kind: EntryKind, id: u64) -> Removal {
        let removed = self.ledger.delete_entry(kind, id);
        Removal {
            removed,
            aggregates: self.refresh(),
        }
    }

    /// Deletes the entry addressed by a rendered reference such as `exp-2`.
    pub fn delete_ref(&mut self, raw: &str) -> LedgerResult<Removal> {
        let entry_ref = raw.parse::<EntryRef>()?;
        Ok(self.delete(entry_ref.kind, entry_ref.id))
    }

    pub fn aggregates(&self) -> Aggregates {
        self.ledger.aggregates()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    fn refresh(&mut self) -> Aggregates {
        self.ledger.recompute_aggregates();
        self.ledger.aggregates()
    }
}
