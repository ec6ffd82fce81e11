//! Typed CRUD over the persisted transaction and budget collections.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use tracker_domain::{position_of, Budget, Identifiable, NewBudget, NewTransaction, Transaction};

use crate::{
    kv::{KeyValueStore, MemoryStore, StorageKey, StoreAdapter},
    CoreError,
};

/// Reads and writes whole record sequences through a [`StoreAdapter`].
///
/// Every operation reloads the current sequence, edits a local copy and writes the
/// full sequence back. Two independent callers interleaving on the same store can
/// therefore lose an update.
#[derive(Clone)]
pub struct RecordStore {
    adapter: StoreAdapter,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            adapter: StoreAdapter::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn adapter(&self) -> &StoreAdapter {
        &self.adapter
    }

    /// Returns stored transactions, most recently added first.
    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.load(StorageKey::Transactions)
    }

    /// Stores a new transaction at the front of the sequence.
    pub fn create_transaction(&self, fields: NewTransaction) -> Result<Transaction, CoreError> {
        let mut transactions = self.list_transactions();
        let transaction = Transaction::from_new(Uuid::new_v4(), fields);
        transactions.insert(0, transaction.clone());
        self.persist(StorageKey::Transactions, &transactions)?;
        debug!(id = %transaction.id, kind = %transaction.kind, "transaction created");
        Ok(transaction)
    }

    /// Replaces the stored transaction with the same id, keeping its position.
    ///
    /// Returns `false` without writing when no record matches.
    pub fn replace_transaction(&self, transaction: Transaction) -> Result<bool, CoreError> {
        let mut transactions = self.list_transactions();
        let id = transaction.id;
        if !replace_record(&mut transactions, transaction) {
            debug!(%id, "transaction not found; nothing replaced");
            return Ok(false);
        }
        self.persist(StorageKey::Transactions, &transactions)?;
        debug!(%id, "transaction replaced");
        Ok(true)
    }

    /// Removes the transaction with `id`. Returns `false` when it was not stored.
    pub fn delete_transaction(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut transactions = self.list_transactions();
        if !remove_record(&mut transactions, id) {
            debug!(%id, "transaction not found; nothing deleted");
            return Ok(false);
        }
        self.persist(StorageKey::Transactions, &transactions)?;
        debug!(%id, "transaction deleted");
        Ok(true)
    }

    /// Overwrites the transaction sequence wholesale.
    pub fn replace_all_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.persist(StorageKey::Transactions, transactions)?;
        debug!(count = transactions.len(), "transaction sequence replaced");
        Ok(())
    }

    /// Returns stored budgets in creation order.
    pub fn list_budgets(&self) -> Vec<Budget> {
        self.load(StorageKey::Budgets)
    }

    /// Stores a new budget at the end of the sequence.
    pub fn create_budget(&self, fields: NewBudget) -> Result<Budget, CoreError> {
        let mut budgets = self.list_budgets();
        let budget = Budget::from_new(Uuid::new_v4(), fields);
        budgets.push(budget.clone());
        self.persist(StorageKey::Budgets, &budgets)?;
        debug!(id = %budget.id, category = %budget.category, "budget created");
        Ok(budget)
    }

    pub fn replace_budget(&self, budget: Budget) -> Result<bool, CoreError> {
        let mut budgets = self.list_budgets();
        let id = budget.id;
        if !replace_record(&mut budgets, budget) {
            debug!(%id, "budget not found; nothing replaced");
            return Ok(false);
        }
        self.persist(StorageKey::Budgets, &budgets)?;
        debug!(%id, "budget replaced");
        Ok(true)
    }

    pub fn delete_budget(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut budgets = self.list_budgets();
        if !remove_record(&mut budgets, id) {
            debug!(%id, "budget not found; nothing deleted");
            return Ok(false);
        }
        self.persist(StorageKey::Budgets, &budgets)?;
        debug!(%id, "budget deleted");
        Ok(true)
    }

    /// Drops both record collections from the backing store.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.adapter.remove(StorageKey::Transactions.as_str())?;
        self.adapter.remove(StorageKey::Budgets.as_str())?;
        debug!("record collections cleared");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        self.adapter.read(key.as_str(), Vec::new()).into_value()
    }

    fn persist<T: Serialize>(&self, key: StorageKey, records: &[T]) -> Result<(), CoreError> {
        self.adapter.write(key.as_str(), records)
    }
}

fn replace_record<T: Identifiable>(records: &mut [T], record: T) -> bool {
    match position_of(records, record.id()) {
        Some(index) => {
            records[index] = record;
            true
        }
        None => false,
    }
}

fn remove_record<T: Identifiable>(records: &mut Vec<T>, id: Uuid) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}
