//! Backing-store implementations of the [`KvStore`] contract.
//!
//! [`SledStore`] is the durable backend used in production;
//! [`MemoryStore`] backs unit tests and ephemeral deployments.

pub mod memory;
pub mod sled;

pub use crate::sled::SledStore;
pub use memory::MemoryStore;

pub use shortmap_core::KvStore;
