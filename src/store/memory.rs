use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::Result;

use super::Slots;

/// In-memory slot backend. Clones share the same map, so the stores of one
/// feature (e.g. books and reading logs) see a single storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slots for MemorySlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear_slot(&self, key: &str) -> Result<()> {
        self.inner.lock().unwrap().remove(key);
        Ok(())
    }
}
