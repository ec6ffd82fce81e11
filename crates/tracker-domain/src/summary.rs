//! Derived views computed from stored records. Never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Totals, balance, per-category expense totals and the most recent transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub recent_transactions: Vec<Transaction>,
    pub category_totals: BTreeMap<String, f64>,
}

/// Budgeted limit compared with actual spend for one category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetUtilization {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Share of the budget spent, clamped to `0..=100`.
    pub percentage: f64,
}

impl BudgetUtilization {
    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// One row of the expense breakdown by category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Percentage of total expense.
    pub share: f64,
}
