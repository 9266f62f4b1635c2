use anyhow::{Context, Result};

const DEFAULT_UPLOAD_DIR: &str = "uploads/resumes";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_JWT_TTL_HOURS: i64 = 24;

/// Where uploaded resume files are kept.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Local filesystem under `upload_dir`.
    Local { upload_dir: String },
    /// S3 or MinIO bucket.
    S3 {
        bucket: String,
        endpoint: String,
        access_key_id: String,
        secret_access_key: String,
    },
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub storage: StorageConfig,
    pub max_upload_bytes: usize,
    /// HMAC secret for signing bearer tokens.
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    /// Allowed CORS origins. Empty means permissive.
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            storage: storage_from_env()?,
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_ttl_hours: match std::env::var("JWT_TTL_HOURS") {
                Ok(v) => v
                    .parse::<i64>()
                    .ok()
                    .filter(|h| *h > 0)
                    .context("JWT_TTL_HOURS must be a positive integer")?,
                Err(_) => DEFAULT_JWT_TTL_HOURS,
            },
            cors_origins: parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// S3 is used when `S3_BUCKET` is set; the endpoint and credentials become required.
fn storage_from_env() -> Result<StorageConfig> {
    match std::env::var("S3_BUCKET") {
        Ok(bucket) if !bucket.trim().is_empty() => Ok(StorageConfig::S3 {
            bucket,
            endpoint: require_env("S3_ENDPOINT")?,
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
        }),
        _ => Ok(StorageConfig::Local {
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
        }),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(" http://localhost:3000 , https://ats.example.com,,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://ats.example.com"]
        );
    }

    #[test]
    fn test_parse_origins_empty_is_permissive() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }
}
