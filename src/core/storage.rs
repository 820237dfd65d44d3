//! Persistent key-value storage abstraction.
//!
//! The attendance archive lives under a single string key. Anything that can
//! get/set a string by key can host it: the SQLite `kv_store` table in
//! normal use, a plain map in tests.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Record an operation in the store's audit trail, if it keeps one.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Volatile store. Also used when the database cannot be opened, so the
/// command still runs (nothing is persisted).
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every `get` fail, as an unavailable backend would.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `set` fail, as a full or read-only backend would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Stored value, bypassing any injected failure.
    #[cfg(test)]
    pub(crate) fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::StorageRead("storage backend unavailable".into()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::StorageWrite("storage backend rejected the write".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
