use crate::cache::OutputCache;
use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory cache lock is poisoned"))?;

        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, raw: &str) -> Result<(), anyhow::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory cache lock is poisoned"))?;

        entries.insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}
