use shortmap_core::code::Code;
use shortmap_core::error::ResolveError;
use shortmap_core::record::Record;
use shortmap_core::store::KvStore;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves codes to their stored records.
#[derive(Debug)]
pub struct Resolver<S> {
    store: Arc<S>,
}

impl<S> Clone for Resolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KvStore> Resolver<S> {
    /// Creates a resolver over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Retrieves the record stored under `code`.
    ///
    /// An absent reverse entry is a not-found condition; a present but
    /// undeserializable one is a corruption condition. The two are
    /// surfaced as distinct errors.
    pub async fn resolve(&self, code: &Code) -> Result<Record, ResolveError> {
        trace!(code = %code, "resolving code");

        let Some(bytes) = self.store.get(code.as_key()).await? else {
            trace!(code = %code, "code not found");
            return Err(ResolveError::NotFound(code.to_string()));
        };

        let record = Record::from_bytes(&bytes).map_err(|e| {
            ResolveError::Corrupted(format!("record under code {code} is invalid: {e}"))
        })?;

        debug!(code = %code, url = %record.url, ext = %record.ext, "resolved code");
        Ok(record)
    }
}
