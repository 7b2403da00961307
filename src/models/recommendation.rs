use serde::{Serialize, Serializer};

use super::CatalogEntry;

/// The pipeline's answer: one catalog entry taken from the candidate set
///
/// Serializes as a one-element JSON array so the response shape can grow to
/// several items without breaking clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    entry: CatalogEntry,
}

impl Recommendation {
    pub fn new(entry: CatalogEntry) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// All recommended entries (currently always exactly one)
    pub fn items(&self) -> &[CatalogEntry] {
        std::slice::from_ref(&self.entry)
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items())
    }
}
