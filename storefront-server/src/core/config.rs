use std::path::PathBuf;
use std::str::FromStr;

use shared::error::{AppError, ErrorCode};

/// Default Google Places details endpoint
pub const PLACES_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Where uploaded images are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Local directory served under `/uploads`
    Local,
    /// S3-compatible bucket
    S3,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(format!("unknown storage backend '{other}' (expected local or s3)")),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATABASE_PATH | storefront.db | SQLite file |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default level when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Daily rotated log files when set |
/// | STATIC_DIR | (unset) | Built frontend bundle (SPA fallback to index.html) |
/// | STORAGE_BACKEND | local | `local` or `s3` |
/// | UPLOAD_DIR | uploads | Local backend root |
/// | PUBLIC_BASE_URL | http://localhost:{HTTP_PORT} | Prefix for local upload URLs |
/// | S3_BUCKET | (unset) | Required for the s3 backend |
/// | S3_PUBLIC_URL | (unset) | Public prefix for bucket objects |
/// | MAX_UPLOAD_BYTES | 10485760 | Upload size limit |
/// | PLACES_API_KEY | (unset) | Google Places key; sample reviews without it |
/// | PLACES_PLACE_ID | (unset) | Place to read reviews for |
/// | PLACES_API_URL | Places details endpoint | Override for testing |
/// | REQUEST_TIMEOUT_MS | 10000 | Outbound HTTP timeout |
/// | CORS_ALLOW_ORIGIN | * | Allowed origin |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 STORAGE_BACKEND=s3 S3_BUCKET=assets cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub storage_backend: StorageBackend,
    pub upload_dir: PathBuf,
    /// No trailing slash
    pub public_base_url: String,
    pub s3_bucket: Option<String>,
    pub s3_public_url: Option<String>,
    pub max_upload_bytes: usize,
    pub places_api_key: Option<String>,
    pub places_place_id: Option<String>,
    pub places_api_url: String,
    pub request_timeout_ms: u64,
    pub cors_allow_origin: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to the defaults above, except
    /// `STORAGE_BACKEND`: an unknown backend is a startup error. This runs
    /// before the logger exists, so nothing here may rely on `tracing`.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let http_port = env_parse("HTTP_PORT", defaults.http_port);
        let storage_backend = storage_backend_from(env_opt("STORAGE_BACKEND"))?;

        Ok(Self {
            http_port,
            database_path: env_or("DATABASE_PATH", defaults.database_path),
            environment: env_or("ENVIRONMENT", defaults.environment),
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            log_dir: env_opt("LOG_DIR"),
            static_dir: env_opt("STATIC_DIR").map(PathBuf::from),
            storage_backend,
            upload_dir: env_opt("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            public_base_url: env_opt("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{http_port}"))
                .trim_end_matches('/')
                .to_string(),
            s3_bucket: env_opt("S3_BUCKET"),
            s3_public_url: env_opt("S3_PUBLIC_URL").map(|u| u.trim_end_matches('/').to_string()),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            places_api_key: env_opt("PLACES_API_KEY"),
            places_place_id: env_opt("PLACES_PLACE_ID"),
            places_api_url: env_or("PLACES_API_URL", defaults.places_api_url),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
            cors_allow_origin: env_or("CORS_ALLOW_ORIGIN", defaults.cors_allow_origin),
        })
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether live reviews can be requested
    pub fn has_places_credentials(&self) -> bool {
        self.places_api_key.is_some() && self.places_place_id.is_some()
    }
}

impl Default for Config {
    /// Built-in defaults, without reading the environment
    fn default() -> Self {
        Self {
            http_port: 3000,
            database_path: "storefront.db".into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            static_dir: None,
            storage_backend: StorageBackend::Local,
            upload_dir: PathBuf::from("uploads"),
            public_base_url: "http://localhost:3000".into(),
            s3_bucket: None,
            s3_public_url: None,
            max_upload_bytes: 10 * 1024 * 1024,
            places_api_key: None,
            places_place_id: None,
            places_api_url: PLACES_DETAILS_URL.into(),
            request_timeout_ms: 10_000,
            cors_allow_origin: "*".into(),
        }
    }
}

/// Backend from `STORAGE_BACKEND`, local when unset
fn storage_backend_from(value: Option<String>) -> Result<StorageBackend, AppError> {
    match value {
        Some(v) => v
            .parse()
            .map_err(|e: String| AppError::with_message(ErrorCode::ConfigError, e)),
        None => Ok(StorageBackend::Local),
    }
}

/// Non-empty variable or `None`
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: String) -> String {
    env_opt(key).unwrap_or(default)
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.storage_backend, StorageBackend::Local);
        assert!(!config.has_places_credentials());
        assert!(!config.is_production());
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("S3".parse::<StorageBackend>(), Ok(StorageBackend::S3));
        assert_eq!(" local ".parse::<StorageBackend>(), Ok(StorageBackend::Local));
        assert!("gcs".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_unknown_storage_backend_is_config_error() {
        assert_eq!(storage_backend_from(None).unwrap(), StorageBackend::Local);
        assert_eq!(
            storage_backend_from(Some("s3".into())).unwrap(),
            StorageBackend::S3
        );
        let err = storage_backend_from(Some("gcs".into())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("gcs"));
    }
}
