//! Lookup side of the mapping service.
//!
//! Resolves a code back to its stored record for redirection. Reads are
//! lock-free: entries are never mutated or deleted after creation, so
//! lookups never conflict with in-flight allocations.

pub mod resolver;

pub use resolver::Resolver;
