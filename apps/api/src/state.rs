use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::storage::FileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable resume file store. S3 when a bucket is configured, local disk otherwise.
    pub store: Arc<dyn FileStore>,
    pub config: Config,
}
