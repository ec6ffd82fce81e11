#![doc(test(attr(deny(warnings))))]

//! Expense Core records income and expense transactions, keeps per-category budgets
//! and derives summaries and budget utilization from whatever is currently stored.

pub mod errors;
pub mod tracker;
pub mod utils;

pub use errors::TrackerError;
pub use tracker::{Dashboard, Tracker};
pub use tracker_config::{Config, ConfigManager};
pub use tracker_core::{
    BudgetService, KeyValueStore, Loaded, MemoryStore, RecordStore, StorageKey, StoreAdapter,
    SummaryService, TransactionQuery, TransactionService, DEFAULT_RECENT_LIMIT,
};
pub use tracker_domain::{
    Budget, BudgetPeriod, BudgetUtilization, CategoryShare, NewBudget, NewTransaction,
    Transaction, TransactionKind, TransactionSummary,
};
pub use tracker_storage_json::JsonFileStore;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    if utils::init_tracing() {
        tracing::info!("Expense Core tracing initialized.");
    }
}

/// Initializes tracing with the configured filter, then opens the configured store.
///
/// When tracing was already initialized the configured filter is not applied.
pub fn init_with_config(config: &Config) -> errors::Result<Tracker> {
    if utils::init_tracing_with(&config.log_filter) {
        tracing::info!("Expense Core tracing initialized.");
    }
    Tracker::open(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic() {
        init();
        init();
    }

    #[test]
    fn init_with_config_after_init_still_opens_store() {
        init();
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            data_root: Some(dir.path().to_path_buf()),
            log_filter: "expense_core=trace".into(),
            ..Config::default()
        };
        let tracker = init_with_config(&config).expect("open tracker");
        assert!(tracker.transactions().is_empty());
    }
}
