//! Budget utilization: budgeted limits compared with recorded expenses.

use std::collections::BTreeMap;

use tracker_domain::{Budget, BudgetUtilization, EXPENSE_CATEGORIES};

use crate::{record_store::RecordStore, summary_service::SummaryService};

pub struct BudgetService;

impl BudgetService {
    /// Recomputes utilization for every stored budget, keyed by category.
    pub fn compute_utilization(store: &RecordStore) -> BTreeMap<String, BudgetUtilization> {
        let summary = SummaryService::summarize(&store.list_transactions(), 0);
        Self::utilization(&store.list_budgets(), &summary.category_totals)
    }

    /// Utilization for `budgets` against per-category expense totals.
    ///
    /// When two budgets share a category the later one in the slice wins.
    pub fn utilization(
        budgets: &[Budget],
        category_totals: &BTreeMap<String, f64>,
    ) -> BTreeMap<String, BudgetUtilization> {
        budgets
            .iter()
            .map(|budget| {
                let spent = category_totals
                    .get(&budget.category)
                    .copied()
                    .unwrap_or(0.0);
                (budget.category.clone(), Self::measure(budget.amount, spent))
            })
            .collect()
    }

    /// Compares a single limit with an amount spent.
    pub fn measure(budget: f64, spent: f64) -> BudgetUtilization {
        let percentage = if budget > 0.0 {
            (spent / budget * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        BudgetUtilization {
            budget,
            spent,
            remaining: budget - spent,
            percentage,
        }
    }

    pub fn has_budget_for(budgets: &[Budget], category: &str) -> bool {
        budgets.iter().any(|budget| budget.category == category)
    }

    /// Suggested expense categories that do not have a budget yet.
    pub fn available_categories(budgets: &[Budget]) -> Vec<&'static str> {
        EXPENSE_CATEGORIES
            .iter()
            .copied()
            .filter(|category| !Self::has_budget_for(budgets, category))
            .collect()
    }
}
