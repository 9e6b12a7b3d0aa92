/// Redis cache for the full catalog snapshot used by recommendations.
///
/// All operations degrade gracefully. If Redis is unavailable, callers read the
/// catalog from the store.
///
/// Key schema:
/// - `dogbreeds:v1:catalog`: JSON-serialized Vec<Breed> (TTL from config)
use breed_common::model::Breed;
use breed_common::redis::RedisCache;
use tracing::warn;

const KEY_PREFIX: &str = "dogbreeds:v1:";

pub struct CatalogCache {
    redis: RedisCache,
    ttl_secs: u64,
}

impl CatalogCache {
    pub fn new(redis: RedisCache, ttl_secs: u64) -> Self {
        Self { redis, ttl_secs }
    }

    pub fn disabled() -> Self {
        Self::new(RedisCache::disabled(), 0)
    }

    pub async fn is_available(&self) -> bool {
        self.redis.is_available().await
    }

    pub async fn get_catalog(&self) -> Option<Vec<Breed>> {
        let key = catalog_key();
        let json = self.redis.get(&key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "cache deserialization failed"))
            .ok()
    }

    pub async fn set_catalog(&self, breeds: &[Breed]) {
        if self.ttl_secs == 0 {
            return;
        }
        let key = catalog_key();
        if let Ok(json) = serde_json::to_string(breeds) {
            self.redis.set_with_ttl(&key, &json, self.ttl_secs).await;
        }
    }

    pub async fn invalidate(&self) {
        self.redis.delete(&catalog_key()).await;
    }
}

fn catalog_key() -> String {
    format!("{KEY_PREFIX}catalog")
}
