use std::sync::Arc;

use shortmap_core::KvStore;
use shortmap_registry::Registry;
use shortmap_resolver::Resolver;

/// Shared handler state: the registry and resolver over one store.
///
/// Both sides are constructed up front and injected before the server
/// accepts its first request; no handler performs lazy initialization.
pub struct AppState<S: KvStore> {
    pub registry: Arc<Registry<S>>,
    pub resolver: Resolver<S>,
}

impl<S: KvStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            resolver: self.resolver.clone(),
        }
    }
}

impl<S: KvStore> AppState<S> {
    pub fn new(registry: Arc<Registry<S>>, resolver: Resolver<S>) -> Self {
        Self { registry, resolver }
    }
}
