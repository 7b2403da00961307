use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, StoredPreferences},
};

/// Storage for per-user preference profiles
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored preferences for `username`, if any
    async fn get(&self, username: &str) -> AppResult<Option<StoredPreferences>>;

    /// Stores `profile` for `username`, replacing any previous profile
    async fn put(&self, username: &str, profile: PreferenceProfile)
        -> AppResult<StoredPreferences>;
}

/// Rejects blank usernames, returning the trimmed name
pub fn validate_username(username: &str) -> AppResult<&str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username(" user_17850 ").unwrap(), "user_17850");
        assert!(matches!(
            validate_username("  "),
            Err(AppError::InvalidInput(_))
        ));
    }
}
