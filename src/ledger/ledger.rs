use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{
    aggregates::Aggregates,
    entry::{Entry, EntryKind},
    validation::ValidationPolicy,
};
use crate::errors::LedgerResult;

/// In-memory income/expense ledger with pull-based aggregates.
///
/// Mutations never refresh the aggregates; call
/// [`Ledger::recompute_aggregates`] before reading [`Ledger::aggregates`].
#[derive(Debug, Clone)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    policy: ValidationPolicy,
    income: Vec<Entry>,
    expense: Vec<Entry>,
    aggregates: Aggregates,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, ValidationPolicy::default())
    }

    pub fn with_policy(name: impl Into<String>, policy: ValidationPolicy) -> Self {
        let now = Utc::now();
        let ledger = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            policy,
            income: Vec::new(),
            expense: Vec::new(),
            aggregates: Aggregates::default(),
        };
        tracing::info!(ledger = %ledger.id, name = %ledger.name, ?policy, "ledger created");
        ledger
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Appends a new entry to `kind` and returns a copy of it.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: f64,
    ) -> LedgerResult<Entry> {
        let description = description.into();
        self.policy.check(&description, value)?;

        let entry = Entry::new(self.next_id(kind), description, value);
        self.items_mut(kind).push(entry.clone());
        self.touch();
        tracing::debug!(ledger = %self.id, %kind, id = entry.id, value, "entry added");
        Ok(entry)
    }

    /// Removes the entry with `id` from `kind`. Missing ids are ignored.
    pub fn delete_entry(&mut self, kind: EntryKind, id: u64) -> Option<Entry> {
        let items = self.items_mut(kind);
        let index = items.iter().position(|entry| entry.id == id)?;
        let removed = items.remove(index);
        self.touch();
        tracing::debug!(ledger = %self.id, %kind, id, "entry deleted");
        Some(removed)
    }

    /// Recomputes totals, budget and percentage from every stored entry.
    pub fn recompute_aggregates(&mut self) {
        let total_income = Self::total(&self.income);
        let total_expense = Self::total(&self.expense);
        self.aggregates = Aggregates::from_totals(total_income, total_expense);
        tracing::debug!(
            ledger = %self.id,
            budget = self.aggregates.budget,
            percentage = self.aggregates.percentage,
            "aggregates recomputed"
        );
    }

    /// Aggregates as of the last recompute.
    pub fn aggregates(&self) -> Aggregates {
        self.aggregates
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    pub fn entry(&self, kind: EntryKind, id: u64) -> Option<&Entry> {
        self.entries(kind).iter().find(|entry| entry.id == id)
    }

    /// Id the next entry of `kind` will receive: last id + 1, or 0 when empty.
    pub fn next_id(&self, kind: EntryKind) -> u64 {
        self.entries(kind).last().map_or(0, |last| last.id + 1)
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn items_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expense,
        }
    }

    fn total(entries: &[Entry]) -> f64 {
        entries.iter().map(|entry| entry.value).sum()
    }
}
