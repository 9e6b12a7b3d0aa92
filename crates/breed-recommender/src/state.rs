use std::sync::Arc;

use breed_common::error::CommonError;
use breed_common::model::Breed;
use breed_common::store::BreedStore;
use tracing::debug;

use crate::cache::CatalogCache;

/// Shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BreedStore>,
    pub cache: Arc<CatalogCache>,
}

impl AppState {
    pub fn new(store: Arc<dyn BreedStore>, cache: CatalogCache) -> Self {
        Self {
            store,
            cache: Arc::new(cache),
        }
    }

    /// The whole catalog, from the snapshot cache when warm.
    pub async fn catalog(&self) -> Result<Vec<Breed>, CommonError> {
        if let Some(breeds) = self.cache.get_catalog().await {
            debug!(count = breeds.len(), "catalog served from cache");
            return Ok(breeds);
        }
        let breeds = self.store.all().await?;
        self.cache.set_catalog(&breeds).await;
        Ok(breeds)
    }
}
