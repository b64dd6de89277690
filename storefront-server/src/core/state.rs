use std::sync::Arc;

use shared::error::AppError;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::storage::{self, ImageStore};
use crate::services::ReviewsService;

/// Server state, shared by every handler
///
/// Cheap to clone: every field is reference counted.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | db | SQLite pool |
/// | storage | Upload backend (local or S3) |
/// | reviews | Places API client |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub storage: Arc<dyn ImageStore>,
    pub reviews: ReviewsService,
}

impl ServerState {
    /// Assemble state from already built parts
    pub fn new(
        config: Config,
        db: DbService,
        storage: Arc<dyn ImageStore>,
        reviews: ReviewsService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db,
            storage,
            reviews,
        }
    }

    /// Open the database, build the storage backend and the reviews client
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let storage = storage::from_config(config).await?;
        let reviews = ReviewsService::new(config)?;

        tracing::info!(
            storage = storage.name(),
            reviews = if config.has_places_credentials() { "places" } else { "sample" },
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), db, storage, reviews))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
