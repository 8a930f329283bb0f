//! Core types and traits for the shortmap URL mapping service.
//!
//! This crate provides the shared vocabulary used by the registry,
//! resolver, and storage crates: the [`Record`] and [`Code`] types, the
//! byte-oriented [`KvStore`] backing-store contract, and the key layout
//! of the persisted mappings.

pub mod code;
pub mod error;
pub mod keys;
pub mod record;
pub mod store;

pub use code::Code;
pub use error::{RegistryError, ResolveError, StoreError};
pub use record::Record;
pub use store::KvStore;
