//! Aggregates a user's transactions into the figures shown on the dashboard.

use crate::transaction::Transaction;

/// The ratio is capped so that the progress bar never overflows.
const MAX_RATIO: f64 = 100.0;

/// The dashboard's summary figures for a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Summary {
    /// The sum of all amounts.
    pub balance: f64,
    /// The sum of the positive amounts.
    pub income: f64,
    /// The sum of the negative amounts, zero or negative.
    pub expense: f64,
    /// Expenses as a percentage of income in [0, 100], zero when there is no
    /// income.
    pub ratio: f64,
}

impl Summary {
    /// Compute the summary for `transactions`.
    ///
    /// Amounts that are not numbers count as zero.
    pub(super) fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;

        for amount in transactions.iter().map(|transaction| transaction.amount) {
            if amount > 0.0 {
                income += amount;
            } else if amount < 0.0 {
                expense += amount;
            }
        }

        let ratio = if income > 0.0 {
            (f64::abs(expense) / income * 100.0).min(MAX_RATIO)
        } else {
            0.0
        };

        Self {
            balance: income + expense,
            income,
            expense,
            ratio,
        }
    }
}
