use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The base-62 digit set, in ascending digit value.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A short code identifying exactly one stored [`Record`](crate::Record).
///
/// Codes produced by [`Code::from_index`] are positional base-62
/// renderings of the allocation counter. Codes arriving from the wire
/// are carried as opaque strings; the rest of the system looks them up
/// as keys and never decodes them back to integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    /// Encodes a counter value as a base-62 code.
    ///
    /// Deterministic and injective: distinct values always produce
    /// distinct codes. Total over all of `u64`.
    pub fn from_index(n: u64) -> Self {
        if n == 0 {
            return Self("0".to_string());
        }
        let mut digits = Vec::new();
        let mut n = n;
        while n > 0 {
            digits.push(ALPHABET[(n % 62) as usize]);
            n /= 62;
        }
        Self(digits.iter().rev().map(|&d| d as char).collect())
    }

    /// Wraps a code received from a caller, treated as an opaque key.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code as the byte key of its reverse mapping entry.
    pub fn as_key(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s))
    }
}
