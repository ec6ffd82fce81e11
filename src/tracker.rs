//! High-level entry point tying a store, the record store and the aggregation services
//! together.

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use tracker_config::Config;
use tracker_core::{
    BudgetService, KeyValueStore, RecordStore, SummaryService, TransactionQuery,
    TransactionService, DEFAULT_RECENT_LIMIT,
};
use tracker_domain::{
    Budget, BudgetUtilization, CategoryShare, NewBudget, NewTransaction, Transaction,
    TransactionSummary,
};
use tracker_storage_json::JsonFileStore;

use crate::errors::Result;

/// Everything a view needs after a mutation, recomputed from the store in one pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub summary: TransactionSummary,
    pub budget_utilization: BTreeMap<String, BudgetUtilization>,
}

/// Record operations and derived views over a single backing store.
///
/// Nothing derived is cached; each read recomputes from stored records.
#[derive(Clone)]
pub struct Tracker {
    records: RecordStore,
    recent_limit: usize,
}

impl Tracker {
    pub fn new(store: Arc<dyn KeyValueStore>, recent_limit: usize) -> Self {
        Self {
            records: RecordStore::new(store),
            recent_limit,
        }
    }

    /// A tracker whose records live only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            records: RecordStore::in_memory(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    /// Opens the JSON file store under the configured data root.
    pub fn open(config: &Config) -> Result<Self> {
        let root = config.resolve_data_root();
        let store = JsonFileStore::new(root.clone())?;
        info!(root = %root.display(), "opened record store");
        Ok(Self::new(Arc::new(store), config.recent_limit))
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.records.list_transactions()
    }

    pub fn add_transaction(&self, fields: NewTransaction) -> Result<Transaction> {
        let created = self.records.create_transaction(fields)?;
        info!(
            id = %created.id,
            kind = %created.kind,
            amount = created.amount,
            "transaction recorded"
        );
        Ok(created)
    }

    pub fn update_transaction(&self, transaction: Transaction) -> Result<bool> {
        Ok(self.records.replace_transaction(transaction)?)
    }

    pub fn remove_transaction(&self, id: Uuid) -> Result<bool> {
        Ok(self.records.delete_transaction(id)?)
    }

    pub fn budgets(&self) -> Vec<Budget> {
        self.records.list_budgets()
    }

    pub fn add_budget(&self, fields: NewBudget) -> Result<Budget> {
        let created = self.records.create_budget(fields)?;
        info!(
            id = %created.id,
            category = %created.category,
            amount = created.amount,
            "budget created"
        );
        Ok(created)
    }

    pub fn update_budget(&self, budget: Budget) -> Result<bool> {
        Ok(self.records.replace_budget(budget)?)
    }

    pub fn remove_budget(&self, id: Uuid) -> Result<bool> {
        Ok(self.records.delete_budget(id)?)
    }

    pub fn summary(&self) -> TransactionSummary {
        SummaryService::compute_summary(&self.records, self.recent_limit)
    }

    pub fn summary_with_limit(&self, recent_limit: usize) -> TransactionSummary {
        SummaryService::compute_summary(&self.records, recent_limit)
    }

    pub fn utilization(&self) -> BTreeMap<String, BudgetUtilization> {
        BudgetService::compute_utilization(&self.records)
    }

    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        SummaryService::category_breakdown(&self.summary_with_limit(0))
    }

    pub fn search(&self, query: &TransactionQuery) -> Vec<Transaction> {
        TransactionService::search(&self.transactions(), query)
    }

    /// Suggested expense categories still free for a new budget.
    pub fn available_budget_categories(&self) -> Vec<&'static str> {
        BudgetService::available_categories(&self.budgets())
    }

    pub fn export_transactions(&self) -> Result<String> {
        Ok(TransactionService::export(&self.records)?)
    }

    /// Replaces every stored transaction with the contents of `json`.
    pub fn import_transactions(&self, json: &str) -> Result<usize> {
        Ok(TransactionService::import(&self.records, json)?)
    }

    /// Loads records once and derives every view from that snapshot.
    pub fn dashboard(&self) -> Dashboard {
        let transactions = self.records.list_transactions();
        let budgets = self.records.list_budgets();
        let summary = SummaryService::summarize(&transactions, self.recent_limit);
        let budget_utilization = BudgetService::utilization(&budgets, &summary.category_totals);
        Dashboard {
            transactions,
            budgets,
            summary,
            budget_utilization,
        }
    }
}
