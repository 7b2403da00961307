use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user's recommendation preferences
///
/// Only `preferred_category` is read by the recommendation pipeline. Any other
/// keys sent by clients are kept in `extra` and round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Canonical catalog category. Older clients send `preferred_categories`.
    #[serde(
        default,
        alias = "preferred_categories",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_category: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreferenceProfile {
    /// Creates a profile with only a preferred category
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            preferred_category: Some(category.into()),
            extra: Map::new(),
        }
    }

    /// The preferred category, if one is set
    ///
    /// The value is returned as stored, blank or not: categories are never
    /// normalized.
    pub fn category(&self) -> Option<&str> {
        self.preferred_category.as_deref()
    }
}

/// Preferences persisted for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    pub username: String,
    pub profile: PreferenceProfile,
    pub updated_at: DateTime<Utc>,
}
