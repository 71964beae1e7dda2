use serde::{Deserialize, Serialize};

/// Sentinel stored in [`Aggregates::percentage`] while no income is recorded.
pub const PERCENTAGE_NOT_AVAILABLE: i64 = -1;

/// Derived budget summary as of the last recompute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Aggregates {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub percentage: i64,
}

impl Default for Aggregates {
    fn default() -> Self {
        Self {
            budget: 0.0,
            total_income: 0.0,
            total_expense: 0.0,
            percentage: PERCENTAGE_NOT_AVAILABLE,
        }
    }
}

impl Aggregates {
    /// Builds the summary for the given totals.
    pub fn from_totals(total_income: f64, total_expense: f64) -> Self {
        let percentage = if total_income > 0.0 {
            (total_expense / total_income * 100.0).round() as i64
        } else {
            PERCENTAGE_NOT_AVAILABLE
        };
        Self {
            budget: total_income - total_expense,
            total_income,
            total_expense,
            percentage,
        }
    }

    /// Expense-to-income percentage, `None` while it is not applicable.
    pub fn spend_percentage(&self) -> Option<i64> {
        (self.percentage != PERCENTAGE_NOT_AVAILABLE).then_some(self.percentage)
    }
}
