//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`; only required with the `postgres` store)
//!
//! ## Optional
//! - `ADMIN_DOCUMENT_STORE` - `postgres` (default) or `memory`
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_COLLECTIONS_PER_PAGE` - Collection table page size (default: 2)
//! - `ADMIN_IMAGE_HOSTS` - Comma-separated hosts allowed for remote images
//! - `ADMIN_RENDER_CACHE_TTL_SECS` - Rendered page cache TTL (default: 300)
//! - `ADMIN_LOG_FORMAT` - `text` (default) or `json`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)
//!
//! ## Optional (TLS)
//! - `ADMIN_TLS_CERT` - PEM-encoded certificate chain
//! - `ADMIN_TLS_KEY` - PEM-encoded private key

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_COLLECTIONS_PER_PAGE: &str = "2";
const DEFAULT_RENDER_CACHE_TTL_SECS: &str = "300";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which document store backend to use.
#[derive(Clone)]
pub enum StoreBackend {
    /// `PostgreSQL` JSONB documents.
    Postgres { database_url: SecretString },
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl std::fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres { .. } => f
                .debug_struct("Postgres")
                .field("database_url", &"[REDACTED]")
                .finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Document store backend
    pub store: StoreBackend,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Rows per page in the collections table
    pub collections_per_page: NonZeroUsize,
    /// Hosts allowed for remote images; empty allows any host
    pub image_hosts: Vec<String>,
    /// How long a rendered page stays cached without a revalidation
    pub render_cache_ttl: Duration,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// TLS configuration for HTTPS (optional)
    pub tls: Option<TlsConfig>,
}

/// TLS configuration for HTTPS.
#[derive(Clone)]
pub struct TlsConfig {
    /// PEM-encoded certificate chain
    pub cert_pem: String,
    /// PEM-encoded private key
    pub key_pem: SecretString,
}

impl std::fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("cert_pem", &"[CERTIFICATE]")
            .field("key_pem", &"[REDACTED]")
            .finish()
    }
}

impl TlsConfig {
    fn from_lookup(env: &Lookup<'_>) -> Result<Option<Self>, ConfigError> {
        let cert_pem = get_optional_env(env, "ADMIN_TLS_CERT");
        let key_pem = get_optional_env(env, "ADMIN_TLS_KEY");

        match (cert_pem, key_pem) {
            (Some(cert), Some(key)) => Ok(Some(Self {
                cert_pem: cert,
                key_pem: SecretString::from(key),
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "ADMIN_TLS_*".to_string(),
                "Both ADMIN_TLS_CERT and ADMIN_TLS_KEY must be set together".to_string(),
            )),
        }
    }
}

impl StoreBackend {
    fn from_lookup(env: &Lookup<'_>) -> Result<Self, ConfigError> {
        match get_env_or_default(env, "ADMIN_DOCUMENT_STORE", "postgres")
            .to_lowercase()
            .as_str()
        {
            "postgres" => Ok(Self::Postgres {
                database_url: get_database_url(env, "ADMIN_DATABASE_URL")?,
            }),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidEnvVar(
                "ADMIN_DOCUMENT_STORE".to_string(),
                format!("expected 'postgres' or 'memory', got '{other}'"),
            )),
        }
    }
}

type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(env: &Lookup<'_>) -> Result<Self, ConfigError> {
        let store = StoreBackend::from_lookup(env)?;
        let host = get_env_or_default(env, "ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(env, "ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let collections_per_page = get_env_or_default(
            env,
            "ADMIN_COLLECTIONS_PER_PAGE",
            DEFAULT_COLLECTIONS_PER_PAGE,
        )
        .parse::<NonZeroUsize>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("ADMIN_COLLECTIONS_PER_PAGE".to_string(), e.to_string())
        })?;
        let image_hosts = get_optional_env(env, "ADMIN_IMAGE_HOSTS")
            .map(|hosts| {
                hosts
                    .split(',')
                    .map(|host| host.trim().to_lowercase())
                    .filter(|host| !host.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let render_cache_ttl = get_env_or_default(
            env,
            "ADMIN_RENDER_CACHE_TTL_SECS",
            DEFAULT_RENDER_CACHE_TTL_SECS,
        )
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| {
            ConfigError::InvalidEnvVar("ADMIN_RENDER_CACHE_TTL_SECS".to_string(), e.to_string())
        })?;
        let log_format = match get_env_or_default(env, "ADMIN_LOG_FORMAT", "text")
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "text" => LogFormat::Text,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "ADMIN_LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };
        let sentry_dsn = get_optional_env(env, "SENTRY_DSN");
        let sentry_environment = get_optional_env(env, "SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env(env, "SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env(env, "SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let tls = TlsConfig::from_lookup(env)?;

        Ok(Self {
            store,
            host,
            port,
            collections_per_page,
            image_hosts,
            render_cache_ttl,
            log_format,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            tls,
        })
    }

    /// Configuration for an in-memory store with defaults, used by tests
    /// and local demos.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3001,
            collections_per_page: NonZeroUsize::MIN.saturating_add(1),
            image_hosts: Vec::new(),
            render_cache_ttl: Duration::from_secs(300),
            log_format: LogFormat::Text,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
            tls: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (used by Fly.io postgres attach).
fn get_database_url(env: &Lookup<'_>, primary_key: &str) -> Result<SecretString, ConfigError> {
    env(primary_key)
        .or_else(|| env("DATABASE_URL"))
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable; blank values count as unset.
fn get_optional_env(env: &Lookup<'_>, key: &str) -> Option<String> {
    env(key).filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(env: &Lookup<'_>, key: &str, default: &str) -> String {
    get_optional_env(env, key).unwrap_or_else(|| default.to_string())
}
