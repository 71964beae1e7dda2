use budget_ledger::ledger::{Aggregates, EntryKind, Ledger, PERCENTAGE_NOT_AVAILABLE};

fn ids(ledger: &Ledger, kind: EntryKind) -> Vec<u64> {
    ledger.entries(kind).iter().map(|entry| entry.id).collect()
}

#[test]
fn sequential_adds_assign_zero_based_ids() {
    let mut ledger = Ledger::new("Sequential");
    for n in 1..=25u64 {
        let entry = ledger
            .add_entry(EntryKind::Expense, format!("item {n}"), n as f64)
            .unwrap();
        assert_eq!(entry.id, n - 1);
    }

    let stored = ids(&ledger, EntryKind::Expense);
    assert!(stored.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ledger.entries(EntryKind::Income).is_empty());
}

#[test]
fn income_only_ledger_reports_zero_percent() {
    let mut ledger = Ledger::new("Salary");
    ledger.add_entry(EntryKind::Income, "Salary", 1000.0).unwrap();
    ledger.recompute_aggregates();

    let aggregates = ledger.aggregates();
    assert_eq!(aggregates.total_income, 1000.0);
    assert_eq!(aggregates.total_expense, 0.0);
    assert_eq!(aggregates.budget, 1000.0);
    assert_eq!(aggregates.percentage, 0);
}

#[test]
fn summarizes_income_and_expense() {
    let mut ledger = Ledger::new("Household");
    ledger.add_entry(EntryKind::Income, "Salary", 2000.0).unwrap();
    ledger.add_entry(EntryKind::Expense, "Rent", 500.0).unwrap();
    ledger.recompute_aggregates();

    assert_eq!(
        ledger.aggregates(),
        Aggregates {
            budget: 1500.0,
            total_income: 2000.0,
            total_expense: 500.0,
            percentage: 25,
        }
    );
}

#[test]
fn expense_without_income_keeps_sentinel() {
    let mut ledger = Ledger::new("Expenses");
    ledger.add_entry(EntryKind::Expense, "Groceries", 80.0).unwrap();
    ledger.recompute_aggregates();

    let aggregates = ledger.aggregates();
    assert_eq!(aggregates.percentage, PERCENTAGE_NOT_AVAILABLE);
    assert_eq!(aggregates.budget, -80.0);
}

#[test]
fn add_then_delete_restores_initial_state() {
    let mut ledger = Ledger::new("Undo");
    let entry = ledger.add_entry(EntryKind::Income, "Refund", 35.5).unwrap();
    ledger.delete_entry(EntryKind::Income, entry.id);
    ledger.recompute_aggregates();

    assert_eq!(ledger.aggregates(), Aggregates::default());
    assert!(ledger.is_empty());
}

#[test]
fn recompute_is_idempotent() {
    let mut ledger = Ledger::new("Idempotent");
    ledger.add_entry(EntryKind::Income, "Salary", 3000.0).unwrap();
    ledger.add_entry(EntryKind::Expense, "Rent", 1000.0).unwrap();

    ledger.recompute_aggregates();
    let first = ledger.aggregates();
    ledger.recompute_aggregates();
    assert_eq!(ledger.aggregates(), first);
    assert_eq!(first.percentage, 33);
}

#[test]
fn readd_continues_from_current_last_entry() {
    let mut ledger = Ledger::new("Readd");
    let first = ledger.add_entry(EntryKind::Expense, "a", 1.0).unwrap();
    let second = ledger.add_entry(EntryKind::Expense, "b", 2.0).unwrap();

    ledger.delete_entry(EntryKind::Expense, first.id);
    let third = ledger.add_entry(EntryKind::Expense, "c", 3.0).unwrap();
    assert_eq!(third.id, second.id + 1);

    ledger.delete_entry(EntryKind::Expense, second.id);
    ledger.delete_entry(EntryKind::Expense, third.id);
    assert_eq!(ledger.next_id(EntryKind::Expense), 0);
    let fresh = ledger.add_entry(EntryKind::Expense, "d", 4.0).unwrap();
    assert_eq!(fresh.id, 0);
}

#[test]
fn independent_ledgers_do_not_share_state() {
    let mut home = Ledger::new("Home");
    let mut work = Ledger::new("Work");
    home.add_entry(EntryKind::Income, "Salary", 100.0).unwrap();
    work.add_entry(EntryKind::Income, "Invoice", 900.0).unwrap();
    home.recompute_aggregates();
    work.recompute_aggregates();

    assert_ne!(home.id, work.id);
    assert_eq!(home.aggregates().total_income, 100.0);
    assert_eq!(work.aggregates().total_income, 900.0);
}
