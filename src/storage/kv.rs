use parking_lot::Mutex;
use std::collections::HashMap;

use crate::utils::StudyHubError;

/// Minimal string key-value storage the token store sits on
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never set or was removed
    fn get_item(&self, key: &str) -> Result<Option<String>, StudyHubError>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), StudyHubError>;

    /// Delete a value; deleting an absent key succeeds
    fn remove_item(&self, key: &str) -> Result<(), StudyHubError>;
}

/// In-process store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StudyHubError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StudyHubError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StudyHubError> {
        self.items.lock().remove(key);
        Ok(())
    }
}
