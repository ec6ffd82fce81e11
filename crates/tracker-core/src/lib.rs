//! tracker-core
//!
//! Persistence adapter, record store and aggregation services for the expense tracker.
//! Depends on tracker-domain. Concrete durable backends live in their own crates.

pub mod budget_service;
pub mod error;
pub mod kv;
pub mod record_store;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::*;
pub use error::CoreError;
pub use kv::{KeyValueStore, Loaded, MemoryStore, StorageKey, StoreAdapter};
pub use record_store::RecordStore;
pub use summary_service::*;
pub use transaction_service::*;
