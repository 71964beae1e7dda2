//! Text formatting for entries and budget summaries handed to presentation adapters.

use serde::{Deserialize, Serialize};

use crate::ledger::{Aggregates, Entry, EntryKind};

const AMOUNT_PRECISION: usize = 2;
const PERCENTAGE_PLACEHOLDER: &str = "---";

/// Number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Formats `value` with two decimals and the locale's separators.
pub fn format_amount(locale: &LocaleConfig, value: f64) -> String {
    let body = format!("{:.*}", AMOUNT_PRECISION, value.abs());
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), ""));
    let mut rendered = group_digits(int_part, locale.grouping_separator);
    if !fraction.is_empty() {
        rendered.push(locale.decimal_separator);
        rendered.push_str(fraction);
    }
    if value < 0.0 && rendered.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        rendered.insert(0, '-');
    }
    rendered
}

/// Renders an entry's value with the sign of its kind: `+ 1,000.00` or `- 50.00`.
pub fn format_signed_entry(locale: &LocaleConfig, kind: EntryKind, entry: &Entry) -> String {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    format!("{} {}", sign, format_amount(locale, entry.value))
}

/// Renders a spend percentage; the not-applicable sentinel becomes a placeholder.
pub fn format_percentage(aggregates: &Aggregates) -> String {
    match aggregates.spend_percentage() {
        Some(percentage) => format!("{}%", percentage),
        None => PERCENTAGE_PLACEHOLDER.to_string(),
    }
}

pub fn format_summary(locale: &LocaleConfig, aggregates: &Aggregates) -> String {
    // Sign follows the rounded amount, not the raw value.
    let budget = format_amount(locale, aggregates.budget);
    let (budget_sign, budget_amount) = match budget.strip_prefix('-') {
        Some(amount) => ('-', amount),
        None => ('+', budget.as_str()),
    };
    format!(
        "Available budget: {} {}\nIncome:   + {}\nExpenses: - {} ({})",
        budget_sign,
        budget_amount,
        format_amount(locale, aggregates.total_income),
        format_amount(locale, aggregates.total_expense),
        format_percentage(aggregates),
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
