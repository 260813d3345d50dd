//! メモリ上のキー・バリューストア（テスト・一時利用）

use crate::error::Error;
use crate::ports::outbound::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// HashMap で保持する KeyValueStore 実装
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, Error> {
        self.entries
            .lock()
            .map_err(|_| Error::system("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let kv = MemoryKeyValueStore::new();
        assert_eq!(kv.get("k").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }
}
