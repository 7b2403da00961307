use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{CandidateSet, CatalogEntry, PreferenceProfile, StoredPreferences},
    services::{
        catalog::CatalogStore,
        preferences::{validate_username, PreferenceStore},
    },
};

/// Catalog held in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    entries: Arc<Vec<CatalogEntry>>,
}

impl InMemoryCatalogStore {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn candidates_for(&self, category: &str, limit: usize) -> AppResult<CandidateSet> {
        let matching = self
            .entries
            .iter()
            .filter(|entry| entry.category == category)
            .take(limit)
            .cloned()
            .collect();

        Ok(CandidateSet::new(matching, limit))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Preference store held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    inner: Arc<RwLock<HashMap<String, StoredPreferences>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, username: &str) -> AppResult<Option<StoredPreferences>> {
        let username = validate_username(username)?;
        let inner = self.inner.read().await;
        Ok(inner.get(username).cloned())
    }

    async fn put(
        &self,
        username: &str,
        profile: PreferenceProfile,
    ) -> AppResult<StoredPreferences> {
        let username = validate_username(username)?;
        let stored = StoredPreferences {
            username: username.to_string(),
            profile,
            updated_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.insert(username.to_string(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn catalog() -> InMemoryCatalogStore {
        InMemoryCatalogStore::new(vec![
            CatalogEntry::new("1", "Lamp Holder", "Lamp holder", "Home Decor", 9.99),
            CatalogEntry::new("2", "Mug", "Mug", "Gifts", 3.0),
            CatalogEntry::new("3", "Vase", "Vase", "Home Decor", 14.5),
            CatalogEntry::new("4", "Candle", "Candle", "Home Decor", 4.25),
        ])
    }

    #[tokio::test]
    async fn test_candidates_filter_by_exact_category() {
        let candidates = catalog().candidates_for("Home Decor", 5).await.unwrap();
        let ids: Vec<&str> = candidates.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[tokio::test]
    async fn test_candidates_category_is_case_sensitive() {
        let candidates = catalog().candidates_for("home decor", 5).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_candidates_respect_limit() {
        let candidates = catalog().candidates_for("Home Decor", 2).await.unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[tokio::test]
    async fn test_candidates_are_stable() {
        let store = catalog();
        let first = store.candidates_for("Home Decor", 5).await.unwrap();
        let second = store.candidates_for("Home Decor", 5).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_not_error() {
        let candidates = catalog().candidates_for("Outdoor", 5).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_preferences_put_and_get() {
        let store = InMemoryPreferenceStore::new();
        assert!(store.get("user_12347").await.unwrap().is_none());

        store
            .put("user_12347", PreferenceProfile::for_category("Gifts"))
            .await
            .unwrap();
        let stored = store
            .put("user_12347", PreferenceProfile::for_category("Home Decor"))
            .await
            .unwrap();

        let fetched = store.get("user_12347").await.unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.profile.category(), Some("Home Decor"));
    }

    #[tokio::test]
    async fn test_preferences_reject_blank_username() {
        let store = InMemoryPreferenceStore::new();
        let result = store.put(" ", PreferenceProfile::default()).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
