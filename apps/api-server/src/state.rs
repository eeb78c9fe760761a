//! Application state - shared across all handlers.

use std::sync::Arc;

use postit_core::ports::PostRepository;
use postit_infra::database::{self, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
///
/// The repository is the process-wide store handle, injected into handlers
/// rather than reached through a global so tests can substitute their own.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub page_size: u64,
}

impl AppState {
    /// Connect to the store and prepare the schema.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db = database::connect(&config.database).await?;
        database::create_tables_if_not_exists(&db).await?;

        let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts,
            page_size: config.page_size,
        })
    }
}
