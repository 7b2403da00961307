use std::sync::Arc;

use shelfwise_api::{
    api::{create_router, AppState},
    config::Config,
    db::{self, PgCatalogStore, RedisPreferenceStore},
    services::HuggingFaceGenerator,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shelfwise_api=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Catalog
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    let catalog = Arc::new(PgCatalogStore::new(pool));

    // Preferences
    let redis_client = db::create_redis_client(&config.redis_url)?;
    let preferences = Arc::new(RedisPreferenceStore::new(redis_client).await?);

    // One generator for the whole process, shared by every request
    let generator = Arc::new(HuggingFaceGenerator::from_config(&config));
    tracing::info!(
        model = %generator.model(),
        api_url = %config.generator_api_url,
        "Text generator configured"
    );

    let state = AppState::new(catalog, generator, preferences, config.pipeline_settings());
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
