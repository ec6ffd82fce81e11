//! Suggested category labels offered to users when recording transactions.
//!
//! Storage never enforces membership in these lists; any label is accepted.

use crate::transaction::TransactionKind;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Groceries",
    "Transport",
    "Housing",
    "Entertainment",
    "Health",
    "Technology",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Gifts", "Investments", "Other"];

/// Returns the suggested labels for the given transaction kind.
pub fn suggested_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Whether `label` is one of the suggested labels for `kind`.
pub fn is_suggested(kind: TransactionKind, label: &str) -> bool {
    suggested_categories(kind).contains(&label)
}
