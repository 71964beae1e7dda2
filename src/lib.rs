#![doc(test(attr(deny(warnings))))]

//! Budget Ledger tracks income and expense entries and derives a running
//! budget summary: totals per kind, net budget and spend percentage.
//!
//! ```
//! use budget_ledger::ledger::{EntryKind, Ledger};
//!
//! let mut ledger = Ledger::new("Household");
//! ledger.add_entry(EntryKind::Income, "Salary", 2000.0).unwrap();
//! ledger.add_entry(EntryKind::Expense, "Rent", 500.0).unwrap();
//! ledger.recompute_aggregates();
//!
//! let summary = ledger.aggregates();
//! assert_eq!(summary.budget, 1500.0);
//! assert_eq!(summary.percentage, 25);
//! ```

pub mod config;
pub mod controller;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_config(&config::Config::default());
}

/// Same as [`init`], honouring the configured log filter.
pub fn init_with_config(config: &config::Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config.log_filter.as_deref());
        tracing::info!("Budget Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
