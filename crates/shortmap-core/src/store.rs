use crate::error::StoreError;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Byte-oriented get/put contract of the durable backing store.
///
/// Implementations must treat keys and values as opaque bytes and
/// report a missing key as `Ok(None)`, never as an error. The mapping
/// layers rely on that distinction to tell "proceed to create" apart
/// from a failed backend.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Reads the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Durably associates `value` with `key`, replacing any prior value.
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;
}
