//! In-memory key-value store for tests and embedding.

use std::collections::HashMap;

use super::KvStore;
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        assert!(store.get("tasks").unwrap().is_none());
    }

    #[test]
    fn set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("tasks", "[]").unwrap();
        store.set("tasks", r#"["x"]"#).unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some(r#"["x"]"#));
        assert_eq!(store.len(), 1);
    }
}
