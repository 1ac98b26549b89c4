//! In-memory implementation of the Backend trait.
//!
//! Primarily for tests and for hosts that provide their own durability. It
//! has the same semantics as SQLite but keeps everything in memory.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::traits::Backend;

/// In-memory backend.
///
/// All data is lost when the backend is dropped. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_basic() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);

        backend.set("k", "[]").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.len().unwrap(), 1);
    }

    #[test]
    fn test_memory_backend_replaces_value() {
        let backend = MemoryBackend::new();
        backend.set("k", "first").unwrap();
        backend.set("k", "second").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_backend_remove() {
        let backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.is_empty().unwrap());
    }
}
