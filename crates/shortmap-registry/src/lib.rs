//! Code allocation and bidirectional mapping registry.
//!
//! This crate holds the write side of the service: the [`Counter`] that
//! owns the next-code value and the [`Registry`] that allocates codes
//! and records the forward and reverse mapping entries.

pub mod counter;
pub mod registry;

pub use counter::Counter;
pub use registry::{Assignment, Registry};
