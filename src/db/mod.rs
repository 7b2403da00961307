pub mod memory;
pub mod postgres;
pub mod redis;

pub use memory::{InMemoryCatalogStore, InMemoryPreferenceStore};
pub use postgres::{create_pool, run_migrations, PgCatalogStore};
pub use self::redis::{create_redis_client, RedisPreferenceStore};
