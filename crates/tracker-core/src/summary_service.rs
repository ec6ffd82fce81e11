//! Totals, balances and per-category breakdowns derived from stored transactions.

use std::{cmp::Ordering, collections::BTreeMap};

use tracker_domain::{CategoryShare, Transaction, TransactionSummary};

use crate::{record_store::RecordStore, transaction_service::sort_newest_first};

/// Number of recent transactions included in a summary unless callers ask otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct SummaryService;

impl SummaryService {
    /// Recomputes the summary from the store's current contents.
    pub fn compute_summary(store: &RecordStore, recent_limit: usize) -> TransactionSummary {
        Self::summarize(&store.list_transactions(), recent_limit)
    }

    /// Summarizes an already loaded transaction sequence.
    pub fn summarize(transactions: &[Transaction], recent_limit: usize) -> TransactionSummary {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut category_totals: BTreeMap<String, f64> = BTreeMap::new();

        for txn in transactions {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expense += txn.amount;
                *category_totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
            }
        }

        let mut recent_transactions = transactions.to_vec();
        sort_newest_first(&mut recent_transactions);
        recent_transactions.truncate(recent_limit);

        TransactionSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            recent_transactions,
            category_totals,
        }
    }

    /// Expense totals per category with their share of total expense, largest first.
    pub fn category_breakdown(summary: &TransactionSummary) -> Vec<CategoryShare> {
        let total: f64 = summary.category_totals.values().sum();
        let mut rows: Vec<CategoryShare> = summary
            .category_totals
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                amount: *amount,
                share: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        rows.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tracker_domain::NewTransaction;
    use uuid::Uuid;

    fn txn(fields: NewTransaction) -> Transaction {
        Transaction::from_new(Uuid::new_v4(), fields)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn empty_sequence_yields_zeroed_summary() {
        let summary = SummaryService::summarize(&[], DEFAULT_RECENT_LIMIT);
        assert_eq!(summary, TransactionSummary::default());
    }

    #[test]
    fn income_is_excluded_from_category_totals() {
        let transactions = vec![
            txn(NewTransaction::income(1000.0, "Salary", date(1, 1))),
            txn(NewTransaction::expense(40.0, "Food", date(1, 2))),
            txn(NewTransaction::expense(60.0, "Food", date(1, 3))),
            txn(NewTransaction::expense(25.0, "Transport", date(1, 4))),
        ];
        let summary = SummaryService::summarize(&transactions, DEFAULT_RECENT_LIMIT);

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expense, 125.0);
        assert_eq!(summary.balance, 875.0);
        assert_eq!(summary.category_totals.len(), 2);
        assert_eq!(summary.category_totals["Food"], 100.0);
        assert_eq!(summary.category_totals["Transport"], 25.0);
        assert!(!summary.category_totals.contains_key("Salary"));
    }

    #[test]
    fn recent_transactions_are_newest_first_and_limited() {
        let transactions: Vec<_> = (1..=8)
            .map(|day| txn(NewTransaction::expense(day as f64, "Food", date(3, day))))
            .collect();
        let summary = SummaryService::summarize(&transactions, 3);

        let days: Vec<_> = summary
            .recent_transactions
            .iter()
            .map(|t| t.date)
            .collect();
        assert_eq!(days, vec![date(3, 8), date(3, 7), date(3, 6)]);
    }

    #[test]
    fn same_day_transactions_keep_storage_order() {
        let first = txn(NewTransaction::expense(1.0, "Food", date(5, 5)));
        let second = txn(NewTransaction::expense(2.0, "Food", date(5, 5)));
        let older = txn(NewTransaction::expense(3.0, "Food", date(5, 1)));
        let summary = SummaryService::summarize(
            &[first.clone(), older.clone(), second.clone()],
            DEFAULT_RECENT_LIMIT,
        );

        assert_eq!(summary.recent_transactions, vec![first, second, older]);
    }

    #[test]
    fn breakdown_sorts_by_amount_and_computes_shares() {
        let transactions = vec![
            txn(NewTransaction::expense(25.0, "Transport", date(1, 1))),
            txn(NewTransaction::expense(75.0, "Food", date(1, 2))),
            txn(NewTransaction::income(500.0, "Salary", date(1, 3))),
        ];
        let summary = SummaryService::summarize(&transactions, DEFAULT_RECENT_LIMIT);
        let rows = SummaryService::category_breakdown(&summary);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].share, 75.0);
        assert_eq!(rows[1].category, "Transport");
        assert_eq!(rows[1].share, 25.0);
    }

    #[test]
    fn breakdown_of_zero_total_reports_zero_shares() {
        let transactions = vec![txn(NewTransaction::expense(0.0, "Food", date(1, 1)))];
        let summary = SummaryService::summarize(&transactions, DEFAULT_RECENT_LIMIT);
        let rows = SummaryService::category_breakdown(&summary);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].share, 0.0);
    }
}
