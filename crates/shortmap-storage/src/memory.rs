use async_trait::async_trait;
use dashmap::DashMap;
use shortmap_core::store::{KvStore, Result};

/// In-memory implementation of the [`KvStore`] contract using DashMap.
///
/// DashMap's sharded locks let concurrent readers and writers proceed
/// without a single map-wide lock, which matches the append-only access
/// pattern of the mapping layers.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: DashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
