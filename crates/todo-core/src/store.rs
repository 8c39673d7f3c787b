//! Key-Value Store Abstraction
//!
//! String-valued storage the persistence layer writes through. The browser
//! build backs this with `localStorage`; tests use `MemoryStore`.

use std::collections::HashMap;

use crate::error::{TodoError, TodoResult};

/// Durable string key-value store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> TodoResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()>;
}

/// In-memory store with an optional byte quota
///
/// The quota mimics the browser's storage limit: a write that would push the
/// total size of keys and values past it fails and leaves the old value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(TodoError::StorageWrite {
                    key: key.to_string(),
                    reason: format!("quota of {} bytes exceeded ({} needed)", quota, needed),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_quota() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("k", "12345").unwrap();
        assert!(store.set_item("k", "1234567890").is_err());
        // Failed write keeps the previous value
        assert_eq!(store.get("k"), Some("12345"));
        // Replacing a key only counts the new value
        store.set_item("k", "123456789").unwrap();
    }
}
