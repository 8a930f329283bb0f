use async_trait::async_trait;
use shortmap_core::error::StoreError;
use shortmap_core::store::{KvStore, Result};
use std::path::Path;

/// Durable [`KvStore`] over an embedded sled database.
///
/// sled calls are fast, non-suspending operations; they run inline on
/// the caller's task rather than being shipped to a blocking pool.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path).map_err(map_sled_error)?;
        Ok(Self { db })
    }

    /// Opens an ephemeral database that is discarded on drop.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(map_sled_error)?;
        Ok(Self { db })
    }
}

#[async_trait]
impl KvStore for SledStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let value = self.db.get(key).map_err(map_sled_error)?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.db.insert(key, value).map_err(map_sled_error)?;
        Ok(())
    }
}

fn map_sled_error(err: sled::Error) -> StoreError {
    match &err {
        sled::Error::Io(_) => StoreError::Unavailable(err.to_string()),
        sled::Error::Corruption { .. } => StoreError::InvalidData(err.to_string()),
        _ => StoreError::Operation(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get() {
        let store = SledStore::temporary().unwrap();

        store.put(b"k", b"v").await.unwrap();
        assert_eq!(store.get(b"k").await.unwrap(), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn missing_key_is_none_not_error() {
        let store = SledStore::temporary().unwrap();

        assert_eq!(store.get(b"absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn arbitrary_byte_keys() {
        let store = SledStore::temporary().unwrap();
        let key = b"\t[\"http://a.example/\",\"x\"]";

        store.put(key, b"2bI").await.unwrap();
        assert_eq!(store.get(key).await.unwrap(), Some(b"2bI".to_vec()));
    }
}
