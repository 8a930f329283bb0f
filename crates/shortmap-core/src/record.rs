use serde::{Deserialize, Serialize};

/// A stored URL record: the original long URL plus its extension tag.
///
/// Records are immutable once written; the reverse mapping entry for a
/// code is never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The original URL that was shortened.
    pub url: String,
    /// An arbitrary classification tag. May be empty.
    pub ext: String,
}

impl Record {
    pub fn new(url: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ext: ext.into(),
        }
    }

    /// Serializes the record for storage as a reverse mapping value.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Deserializes a stored reverse mapping value.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
