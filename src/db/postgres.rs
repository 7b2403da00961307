use sqlx::{postgres::PgPoolOptions, types::Json, FromRow, PgPool};
use std::collections::BTreeMap;

use crate::{
    error::AppResult,
    models::{CandidateSet, CatalogEntry, FeatureValue},
    services::catalog::CatalogStore,
};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    category: String,
    price: f64,
    features: Json<BTreeMap<String, FeatureValue>>,
}

impl From<ProductRow> for CatalogEntry {
    fn from(row: ProductRow) -> Self {
        CatalogEntry {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            features: row.features.0,
        }
    }
}

/// Catalog backed by the `products` table
///
/// Ordered by `id`, so a category yields the same candidates until the table changes.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CatalogStore for PgCatalogStore {
    async fn candidates_for(&self, category: &str, limit: usize) -> AppResult<CandidateSet> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, category, price, features
            FROM products
            WHERE category = $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(category)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            category = %category,
            rows = rows.len(),
            store = self.name(),
            "Catalog lookup completed"
        );

        Ok(CandidateSet::new(
            rows.into_iter().map(CatalogEntry::from).collect(),
            limit,
        ))
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
