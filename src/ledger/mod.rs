//! Ledger domain models and the aggregation logic over them.

pub mod aggregates;
pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod validation;

pub use aggregates::{Aggregates, PERCENTAGE_NOT_AVAILABLE};
pub use entry::{Entry, EntryKind, EntryRef};
pub use ledger::Ledger;
pub use validation::{validate_entry, ValidationPolicy};
