use crate::counter::Counter;
use shortmap_core::code::Code;
use shortmap_core::error::{RegistryError, StoreError};
use shortmap_core::keys::forward_key;
use shortmap_core::record::Record;
use shortmap_core::store::KvStore;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of [`Registry::get_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The code mapped to the `(url, ext)` pair.
    pub code: Code,
    /// The record stored under that code.
    pub record: Record,
    /// Whether this call performed the allocation.
    pub is_new: bool,
}

/// The mapping registry: allocates codes and records the forward and
/// reverse entries for each `(url, ext)` pair.
///
/// Entries are append-only. A pair is mapped at most once for the
/// lifetime of the store, and codes allocated within one process run
/// are strictly increasing.
#[derive(Debug)]
pub struct Registry<S> {
    store: Arc<S>,
    counter: Counter,
}

impl<S: KvStore> Registry<S> {
    /// Opens a registry over `store`, initializing the counter from the
    /// persisted checkpoint entry.
    pub async fn open(store: Arc<S>) -> Result<Self, StoreError> {
        let counter = Counter::load(store.as_ref()).await?;
        Ok(Self { store, counter })
    }

    /// Returns a snapshot of the next-code value.
    pub async fn counter_value(&self) -> u64 {
        self.counter.value().await
    }

    /// Persists the counter to the checkpoint entry.
    pub async fn checkpoint(&self) -> Result<(), StoreError> {
        self.counter.checkpoint(self.store.as_ref()).await
    }

    /// Returns the code mapped to `(url, ext)`, allocating one if the
    /// pair has never been seen.
    ///
    /// The URL and extension are trimmed of surrounding whitespace; an
    /// empty URL is rejected before anything is stored. The common case
    /// of an existing mapping is served without taking the allocation
    /// lock.
    pub async fn get_or_create(&self, url: &str, ext: &str) -> Result<Assignment, RegistryError> {
        let url = url.trim();
        let ext = ext.trim();
        if url.is_empty() {
            return Err(RegistryError::EmptyUrl);
        }

        let key = forward_key(url, ext);

        // Fast path: entries are never mutated or deleted, so a hit
        // here is authoritative without any locking.
        if let Some(existing) = self.lookup_existing(&key).await? {
            trace!(code = %existing.code, url, "existing mapping hit");
            return Ok(existing);
        }

        let mut next = self.counter.lock().await;

        // Re-check under the lock: a concurrent request for the same
        // pair may have created the entry after our unlocked read. The
        // pair must not receive a second code.
        if let Some(existing) = self.lookup_existing(&key).await? {
            trace!(code = %existing.code, url, "mapping created concurrently");
            return Ok(existing);
        }

        let record = Record::new(url, ext);
        let code = Counter::allocate(&mut next);
        let value = record
            .to_bytes()
            .map_err(|e| RegistryError::Corrupted(e.to_string()))?;

        // Reverse entry before forward entry: a crash between the two
        // writes leaves at worst an orphan record under a code no one
        // has observed, never a forward entry pointing at nothing.
        self.store.put(code.as_key(), &value).await?;
        self.store.put(&key, code.as_key()).await?;

        debug!(code = %code, url, ext, "allocated code");
        Ok(Assignment {
            code,
            record,
            is_new: true,
        })
    }

    /// Reads the forward entry for `key` and reconstructs the stored
    /// record from the matching reverse entry.
    async fn lookup_existing(&self, key: &[u8]) -> Result<Option<Assignment>, RegistryError> {
        let Some(code_bytes) = self.store.get(key).await? else {
            return Ok(None);
        };
        let code = String::from_utf8(code_bytes)
            .map(Code::new)
            .map_err(|e| RegistryError::Corrupted(format!("forward entry is not a code: {e}")))?;
        let Some(record_bytes) = self.store.get(code.as_key()).await? else {
            return Err(RegistryError::Corrupted(format!(
                "forward entry points at code {code} with no record"
            )));
        };
        let record = Record::from_bytes(&record_bytes).map_err(|e| {
            RegistryError::Corrupted(format!("record under code {code} is invalid: {e}"))
        })?;
        Ok(Some(Assignment {
            code,
            record,
            is_new: false,
        }))
    }
}
