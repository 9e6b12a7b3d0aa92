/// Breed catalog storage backends.
///
/// The server holds one `Arc<dyn BreedStore>` built at startup and closes it on
/// shutdown. Both backends order the directory by identifier ascending.
mod memory;
mod mongo;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::catalog::CatalogQuery;
use crate::error::CommonError;
use crate::model::{Breed, BreedPage};

#[async_trait]
pub trait BreedStore: Send + Sync {
    /// One directory page: matching records, total match count and page math.
    async fn page(&self, query: &CatalogQuery) -> Result<BreedPage, CommonError>;

    /// Every record, ordered by identifier.
    async fn all(&self) -> Result<Vec<Breed>, CommonError>;

    async fn get(&self, id: &str) -> Result<Option<Breed>, CommonError>;

    /// Round-trip to the backend.
    async fn ping(&self) -> Result<(), CommonError>;

    /// Release connections. Called once at shutdown.
    async fn close(&self);
}
