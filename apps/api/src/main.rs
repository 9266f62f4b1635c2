mod analysis;
mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod resumes;
mod routes;
mod state;
mod storage;
mod users;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageConfig};
use crate::db::create_pool;
use crate::matching::vocabulary::SKILL_VOCABULARY;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, LocalFileStore, S3FileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize resume storage
    let store = build_file_store(&config).await;

    info!("Skill vocabulary loaded ({} entries)", SKILL_VOCABULARY.len());

    let cors = build_cors(&config.cors_origins)?;

    // Build app state
    let state = AppState {
        db,
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// S3 (MinIO locally, AWS in production) when a bucket is configured, local disk otherwise.
async fn build_file_store(config: &Config) -> Arc<dyn FileStore> {
    match &config.storage {
        StorageConfig::S3 {
            bucket,
            endpoint,
            access_key_id,
            secret_access_key,
        } => {
            let credentials =
                Credentials::new(access_key_id, secret_access_key, None, None, "ats-static");

            let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new("us-east-1"))
                .credentials_provider(credentials)
                .endpoint_url(endpoint)
                .load()
                .await;

            info!("Resume storage: s3://{bucket}");
            Arc::new(S3FileStore::new(
                aws_sdk_s3::Client::new(&s3_config),
                bucket.clone(),
            ))
        }
        StorageConfig::Local { upload_dir } => {
            info!("Resume storage: local directory {upload_dir}");
            Arc::new(LocalFileStore::new(upload_dir))
        }
    }
}

/// Permissive when no origins are configured.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
