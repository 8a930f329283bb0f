use shortmap_core::code::Code;
use shortmap_core::error::StoreError;
use shortmap_core::keys::CHECKPOINT_KEY;
use shortmap_core::store::KvStore;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Counter value used when no checkpoint entry exists yet.
pub const DEFAULT_START: u64 = 10_000;

/// Owner of the authoritative next-code value.
///
/// The value lives behind a single mutex that doubles as the registry's
/// allocation lock: allocation is only reachable through a held guard,
/// so a checkpoint can never interleave with an in-flight allocation.
#[derive(Debug)]
pub struct Counter {
    next: Mutex<u64>,
}

impl Counter {
    /// Initializes the counter from the persisted checkpoint entry.
    ///
    /// An absent checkpoint means a fresh store and yields
    /// [`DEFAULT_START`]. Any other failure, including an
    /// undeserializable checkpoint, is returned to the caller; the
    /// process must not start serving with unreadable counter state.
    pub async fn load<S: KvStore>(store: &S) -> Result<Self, StoreError> {
        let next = match store.get(CHECKPOINT_KEY).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::InvalidData(format!("checkpoint entry is not a counter: {e}"))
            })?,
            None => {
                info!(start = DEFAULT_START, "no checkpoint entry, starting fresh");
                DEFAULT_START
            }
        };
        debug!(next, "counter initialized");
        Ok(Self {
            next: Mutex::new(next),
        })
    }

    /// Returns a snapshot of the next-code value.
    pub async fn value(&self) -> u64 {
        *self.next.lock().await
    }

    /// Persists the current value to the checkpoint entry.
    ///
    /// Failures of the underlying write are reported, not retried.
    pub async fn checkpoint<S: KvStore>(&self, store: &S) -> Result<(), StoreError> {
        let next = self.next.lock().await;
        let bytes = serde_json::to_vec(&*next)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        store.put(CHECKPOINT_KEY, &bytes).await?;
        debug!(next = *next, "counter checkpointed");
        Ok(())
    }

    /// Acquires the allocation lock.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, u64> {
        self.next.lock().await
    }

    /// Returns the code for the current value and advances it by one.
    ///
    /// Taking the guard by mutable reference makes holding the
    /// allocation lock a compile-time requirement: this is a sub-step
    /// of the registry's critical section, not an independent
    /// operation.
    pub(crate) fn allocate(guard: &mut MutexGuard<'_, u64>) -> Code {
        let code = Code::from_index(**guard);
        **guard += 1;
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shortmap_storage::MemoryStore;

    #[tokio::test]
    async fn defaults_when_checkpoint_absent() {
        let store = MemoryStore::new();

        let counter = Counter::load(&store).await.unwrap();
        assert_eq!(counter.value().await, DEFAULT_START);
    }

    #[tokio::test]
    async fn checkpoint_round_trip() {
        let store = MemoryStore::new();

        let counter = Counter::load(&store).await.unwrap();
        {
            let mut guard = counter.lock().await;
            Counter::allocate(&mut guard);
            Counter::allocate(&mut guard);
        }
        counter.checkpoint(&store).await.unwrap();

        let reloaded = Counter::load(&store).await.unwrap();
        assert_eq!(reloaded.value().await, DEFAULT_START + 2);
    }

    #[tokio::test]
    async fn unreadable_checkpoint_is_fatal() {
        let store = MemoryStore::new();
        store.put(CHECKPOINT_KEY, b"not a number").await.unwrap();

        let err = Counter::load(&store).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[tokio::test]
    async fn store_failure_at_load_is_fatal() {
        struct BrokenStore;

        #[async_trait]
        impl KvStore for BrokenStore {
            async fn get(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
                Err(StoreError::Unavailable("down".into()))
            }
            async fn put(&self, _key: &[u8], _value: &[u8]) -> Result<(), StoreError> {
                Err(StoreError::Unavailable("down".into()))
            }
        }

        let err = Counter::load(&BrokenStore).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn allocation_advances_under_one_guard() {
        let store = MemoryStore::new();
        let counter = Counter::load(&store).await.unwrap();

        let mut guard = counter.lock().await;
        let first = Counter::allocate(&mut guard);
        let second = Counter::allocate(&mut guard);
        drop(guard);

        assert_ne!(first, second);
        assert_eq!(counter.value().await, DEFAULT_START + 2);
    }
}
