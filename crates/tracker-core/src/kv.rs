//! String-keyed persistence seam and the JSON adapter layered on top of it.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};

use crate::CoreError;

/// Keys under which the tracker keeps its collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Transactions,
    Budgets,
    /// Reserved for user settings; no record operation reads or writes it.
    Settings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::Transactions,
        StorageKey::Budgets,
        StorageKey::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Transactions => "expense-tracker-transactions",
            StorageKey::Budgets => "expense-tracker-budgets",
            StorageKey::Settings => "expense-tracker-settings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstraction over durable string-to-string stores.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    /// Deletes `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Process-local store, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poison) => poison.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> CoreError {
    CoreError::Storage("memory store lock poisoned".into())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

/// Outcome of a tolerant read.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// The stored value decoded successfully.
    Stored(T),
    /// Nothing was stored under the key.
    Default(T),
    /// The backend failed or the stored value could not be decoded.
    Fallback { value: T, reason: String },
}

impl<T> Loaded<T> {
    pub fn into_value(self) -> T {
        match self {
            Loaded::Stored(value) | Loaded::Default(value) => value,
            Loaded::Fallback { value, .. } => value,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Loaded::Stored(value) | Loaded::Default(value) => value,
            Loaded::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Loaded::Fallback { .. })
    }
}

/// JSON encode/decode over a [`KeyValueStore`].
///
/// Reads never fail: a missing key yields the supplied default and any backend or
/// decode failure is logged and reported as [`Loaded::Fallback`]. Writes and removals
/// log failures and hand them back to the caller.
#[derive(Clone)]
pub struct StoreAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl StoreAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> Loaded<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Loaded::Default(default),
            Err(err) => {
                warn!(key, error = %err, "store read failed; using default");
                return Loaded::Fallback {
                    value: default,
                    reason: err.to_string(),
                };
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Loaded::Stored(value),
            Err(err) => {
                warn!(key, error = %err, "stored value is malformed; using default");
                Loaded::Fallback {
                    value: default,
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let result = serde_json::to_string(value)
            .map_err(|err| CoreError::Serde(err.to_string()))
            .and_then(|json| self.store.set(key, &json));
        if let Err(err) = &result {
            error!(key, error = %err, "failed to persist value");
        }
        result
    }

    pub fn remove(&self, key: &str) -> Result<(), CoreError> {
        let result = self.store.remove(key);
        if let Err(err) = &result {
            error!(key, error = %err, "failed to remove value");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
            Err(CoreError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }
    }

    fn memory_adapter() -> StoreAdapter {
        StoreAdapter::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn missing_key_yields_default() {
        let adapter = memory_adapter();
        let loaded = adapter.read("absent", vec![1u32]);
        assert_eq!(loaded, Loaded::Default(vec![1]));
    }

    #[test]
    fn written_value_reads_back() {
        let adapter = memory_adapter();
        adapter.write("numbers", &vec![3u32, 4]).unwrap();
        let loaded: Loaded<Vec<u32>> = adapter.read("numbers", Vec::new());
        assert_eq!(loaded, Loaded::Stored(vec![3, 4]));
    }

    #[test]
    fn malformed_value_falls_back() {
        let adapter = memory_adapter();
        adapter.store().set("numbers", "{not json").unwrap();
        let loaded: Loaded<Vec<u32>> = adapter.read("numbers", Vec::new());
        assert!(loaded.is_fallback());
        assert!(loaded.into_value().is_empty());
    }

    #[test]
    fn empty_string_is_treated_as_absent() {
        let adapter = memory_adapter();
        adapter.store().set("numbers", "").unwrap();
        let loaded: Loaded<Vec<u32>> = adapter.read("numbers", Vec::new());
        assert_eq!(loaded, Loaded::Default(Vec::new()));
    }

    #[test]
    fn backend_failures_are_masked_on_read_and_surfaced_on_write() {
        let adapter = StoreAdapter::new(Arc::new(BrokenStore));
        let loaded: Loaded<Vec<u32>> = adapter.read("numbers", vec![7]);
        assert!(
            matches!(loaded, Loaded::Fallback { ref reason, .. } if reason.contains("unavailable")),
            "unexpected read outcome: {loaded:?}"
        );
        assert_eq!(loaded.into_value(), vec![7]);

        let err = adapter
            .write("numbers", &vec![1u32])
            .expect_err("write must fail");
        assert!(matches!(err, CoreError::Storage(ref message) if message.contains("quota")));
        assert!(adapter.remove("numbers").is_err());
    }

    #[test]
    fn removing_absent_key_is_a_no_op() {
        let adapter = memory_adapter();
        adapter.remove("absent").expect("remove absent key");
    }

    #[test]
    fn storage_keys_are_distinct() {
        let keys: Vec<_> = StorageKey::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.iter().all(|key| key.starts_with("expense-tracker-")));
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn len_survives_poisoned_lock() {
        let store = Arc::new(MemoryStore::new());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert!(matches!(store.get("a"), Err(CoreError::Storage(_))));
    }
}
