//! Transaction queries plus bulk JSON export and import.

use std::{cmp::Reverse, collections::HashSet};

use tracing::{info, warn};

use tracker_domain::{Transaction, TransactionKind};

use crate::{record_store::RecordStore, CoreError};

/// Orders transactions by date, newest first. Equal dates keep their relative order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|txn| Reverse(txn.date));
}

/// Filter applied when searching the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Case-insensitive text matched against description or category. Empty matches all.
    pub text: String,
    /// Restricts results to one kind when set.
    pub kind: Option<TransactionKind>,
}

impl TransactionQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| kind != txn.kind) {
            return false;
        }
        let needle = self.text.to_lowercase();
        needle.is_empty()
            || txn.description.to_lowercase().contains(&needle)
            || txn.category.to_lowercase().contains(&needle)
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Matching transactions, newest first.
    pub fn search(transactions: &[Transaction], query: &TransactionQuery) -> Vec<Transaction> {
        let mut matches: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| query.matches(txn))
            .cloned()
            .collect();
        sort_newest_first(&mut matches);
        matches
    }

    /// Serializes the full stored sequence, in storage order, to a JSON array.
    pub fn export(store: &RecordStore) -> Result<String, CoreError> {
        serde_json::to_string(&store.list_transactions())
            .map_err(|err| CoreError::Serde(err.to_string()))
    }

    /// Replaces all stored transactions with those parsed from `json`.
    ///
    /// Nothing is written when parsing fails or when two records share an id.
    /// Returns the number of imported records.
    pub fn import(store: &RecordStore, json: &str) -> Result<usize, CoreError> {
        let transactions: Vec<Transaction> = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "rejected transaction import");
            CoreError::Import(err.to_string())
        })?;
        let mut seen = HashSet::with_capacity(transactions.len());
        if let Some(dup) = transactions.iter().find(|txn| !seen.insert(txn.id)) {
            warn!(id = %dup.id, "rejected transaction import with duplicate id");
            return Err(CoreError::Import(format!("duplicate transaction id {}", dup.id)));
        }
        store.replace_all_transactions(&transactions)?;
        info!(count = transactions.len(), "transactions imported");
        Ok(transactions.len())
    }
}
