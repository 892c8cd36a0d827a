use std::collections::HashMap;

use super::PersistentStore;

/// In-memory store; contents vanish with the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    fn get_integer(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_integer(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}
