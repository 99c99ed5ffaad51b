use std::sync::Arc;

use haven_db::store::{ListingStore, MemoryListingStore, PgListingStore};
use haven_media::MediaHost;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Listing persistence backend, selected once at startup.
    pub store: Arc<dyn ListingStore>,
    /// Media host for photo materialization; `None` disables uploads.
    pub media: Option<Arc<MediaHost>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Which backend `store` is, reported by `/health`.
    pub backend: &'static str,
}

/// Choose the persistence backend once at startup.
///
/// A configured `DATABASE_URL` selects Postgres; connection, health-check,
/// or migration failures fall back to the seeded in-memory catalog rather
/// than aborting the process.
pub async fn select_store(config: &ServerConfig) -> (Arc<dyn ListingStore>, &'static str) {
    if let Some(url) = &config.database_url {
        match connect(url).await {
            Ok(store) => {
                tracing::info!("Using Postgres listing store");
                return (Arc::new(store), "postgres");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Database unavailable, falling back to in-memory catalog");
            }
        }
    }
    (Arc::new(MemoryListingStore::seeded()), "memory")
}

async fn connect(
    database_url: &str,
) -> Result<PgListingStore, Box<dyn std::error::Error + Send + Sync>> {
    let pool = haven_db::create_pool(database_url).await?;
    haven_db::health_check(&pool).await?;
    haven_db::run_migrations(&pool).await?;
    Ok(PgListingStore::new(pool))
}
