use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use redis::Client;
use std::fmt::Display;

use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, StoredPreferences},
    services::preferences::{validate_username, PreferenceStore},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    User(String),
}

impl Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceKey::User(username) => write!(f, "prefs:{}", username),
        }
    }
}

/// Creates a Redis client
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Preference store keeping one JSON document per user in Redis
///
/// Entries have no expiry: preferences live until overwritten.
#[derive(Clone)]
pub struct RedisPreferenceStore {
    conn: ConnectionManager,
}

impl RedisPreferenceStore {
    /// Connects through a connection manager that reconnects on failure
    pub async fn new(client: Client) -> AppResult<Self> {
        let conn = ConnectionManager::new(client).await?;
        tracing::info!("Redis preference store connected");
        Ok(Self { conn })
    }
}

#[async_trait::async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn get(&self, username: &str) -> AppResult<Option<StoredPreferences>> {
        let key = PreferenceKey::User(validate_username(username)?.to_string());
        let mut conn = self.conn.clone();
        let stored: Option<String> = conn.get(key.to_string()).await?;

        match stored {
            Some(json) => {
                let data = serde_json::from_str(&json).map_err(|e| {
                    AppError::Internal(format!("Preference deserialization error: {}", e))
                })?;
                Ok(Some(data))
            }
            None => {
                tracing::debug!(key = %key, "No stored preferences");
                Ok(None)
            }
        }
    }

    async fn put(
        &self,
        username: &str,
        profile: PreferenceProfile,
    ) -> AppResult<StoredPreferences> {
        let username = validate_username(username)?;
        let key = PreferenceKey::User(username.to_string());
        let stored = StoredPreferences {
            username: username.to_string(),
            profile,
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&stored)
            .map_err(|e| AppError::Internal(format!("Preference serialization error: {}", e)))?;

        let mut conn = self.conn.clone();
        let _: () = conn.set(key.to_string(), json).await?;

        tracing::debug!(key = %key, "Stored preferences");
        Ok(stored)
    }
}
