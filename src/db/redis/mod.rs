pub mod preferences;

pub use preferences::create_redis_client;
pub use preferences::PreferenceKey;
pub use preferences::RedisPreferenceStore;
