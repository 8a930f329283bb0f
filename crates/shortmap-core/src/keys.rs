//! Key layout of the backing store.
//!
//! Three key families share one keyspace:
//!   - reverse mapping entries, keyed by the bare code (alphanumeric);
//!   - forward mapping entries, prefixed with a tab so they can never
//!     collide with a code;
//!   - the checkpoint entry, whose `:` likewise sits outside the
//!     base-62 alphabet.

/// Distinguished key holding the serialized counter. Written only on
/// explicit checkpoint, read once at startup.
pub const CHECKPOINT_KEY: &[u8] = b"meta:total";

/// Builds the forward mapping key for a `(url, ext)` pair.
///
/// The pair is JSON-encoded so that delimiter characters inside either
/// value cannot make two distinct pairs produce the same key. The key
/// is only ever constructed, never parsed back.
pub fn forward_key(url: &str, ext: &str) -> Vec<u8> {
    let mut key = vec![b'\t'];
    // Serializing a pair of borrowed strings cannot fail.
    if let Ok(encoded) = serde_json::to_vec(&(url, ext)) {
        key.extend_from_slice(&encoded);
    }
    key
}
