use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar value of a product feature attribute (e.g. `"material": "ceramic"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A product available for recommendation
///
/// Entries are loaded by a `CatalogStore` and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique product identifier (stock code)
    pub id: String,
    /// Display name, also the needle used when resolving generated text
    pub name: String,
    pub description: String,
    /// Category, compared exactly (case-sensitive)
    pub category: String,
    /// Unit price, never negative
    pub price: f64,
    #[serde(default)]
    pub features: BTreeMap<String, FeatureValue>,
}

impl CatalogEntry {
    /// Creates an entry without feature attributes
    ///
    /// `price` must be non-negative.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        debug_assert!(price >= 0.0, "catalog price must be non-negative, got {}", price);
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
            features: BTreeMap::new(),
        }
    }

    /// Adds a feature attribute
    pub fn with_feature(mut self, key: impl Into<String>, value: FeatureValue) -> Self {
        self.features.insert(key.into(), value);
        self
    }
}

/// Bounded, ordered sample of catalog entries shown to the model for one request
///
/// Built fresh per request. There is no way to mutate a set once built, so the
/// entries a recommendation is resolved against are exactly the ones that were
/// rendered into the prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    entries: Vec<CatalogEntry>,
}

impl CandidateSet {
    /// Builds a set from store results, keeping at most `limit` entries in their given order
    pub fn new(mut entries: Vec<CatalogEntry>, limit: usize) -> Self {
        entries.truncate(limit);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, entry: &CatalogEntry) -> bool {
        self.entries.contains(entry)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
