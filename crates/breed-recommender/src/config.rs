use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_DATABASE: &str = "dogBreedRecommender";
const DEFAULT_COLLECTION: &str = "dogBreeds";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Where the breed catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Mongo {
        uri: String,
        database: String,
        collection: String,
    },
    /// A `dog_breeds.json` export served from memory.
    JsonFile(PathBuf),
}

/// Application configuration loaded explicitly from environment variables.
///
/// Redis URL is optional; if absent, recommendations always read the catalog from
/// the store.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CatalogSource,
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables caching.
    pub redis_url: Option<String>,
    pub cache_ttl_secs: u64,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// One of these is required (`BREEDS_JSON_PATH` wins when both are set):
    /// - `MONGODB_URI`, with optional `MONGODB_DATABASE` and `MONGODB_COLLECTION`
    /// - `BREEDS_JSON_PATH`: path to a JSON export of the catalog
    ///
    /// Optional:
    /// - `REDIS_URL`: Redis connection string (omit to disable caching)
    /// - `CATALOG_CACHE_TTL_SECS`: lifetime of the cached catalog snapshot
    /// - `BIND_ADDR`: listen address, `0.0.0.0:3000` by default
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let source = match (var("BREEDS_JSON_PATH"), var("MONGODB_URI")) {
            (Some(path), _) => CatalogSource::JsonFile(PathBuf::from(path)),
            (None, Some(uri)) => CatalogSource::Mongo {
                uri,
                database: var("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
                collection: var("MONGODB_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            },
            (None, None) => {
                return Err(AppError::Config(
                    "MONGODB_URI or BREEDS_JSON_PATH environment variable is required".to_string(),
                ))
            }
        };

        let cache_ttl_secs = match var("CATALOG_CACHE_TTL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("CATALOG_CACHE_TTL_SECS is not a number: {raw}"))
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is not a socket address: {e}")))?;

        Ok(Self {
            source,
            redis_url: var("REDIS_URL"),
            cache_ttl_secs,
            bind_addr,
        })
    }
}
