use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use super::BreedStore;
use crate::catalog::CatalogQuery;
use crate::error::CommonError;
use crate::model::{Breed, BreedPage};

const NAME_FIELD: &str = "Dog Name";
const TEMPERAMENT_FIELD: &str = "Temperament";

/// The breed collection in MongoDB. The client pools connections internally, so
/// one instance is shared by every request.
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, CommonError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        info!(
            database = database.name(),
            collection = collection.name(),
            "mongodb client ready"
        );
        Ok(Self {
            client,
            database,
            collection,
        })
    }

    async fn find_sorted(
        &self,
        filter: Document,
        skip: Option<u64>,
        limit: Option<i64>,
    ) -> Result<Vec<Breed>, CommonError> {
        let mut find = self.collection.find(filter).sort(doc! { "_id": 1 });
        if let Some(skip) = skip {
            find = find.skip(skip);
        }
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        let cursor = find.await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        documents.into_iter().map(breed_from_document).collect()
    }
}

#[async_trait]
impl BreedStore for MongoStore {
    async fn page(&self, query: &CatalogQuery) -> Result<BreedPage, CommonError> {
        let filter = search_filter(&query.search);
        let total = self.collection.count_documents(filter.clone()).await?;
        let Some(window) = page_window(query, total) else {
            debug!(total, page = query.page, "directory page beyond the end");
            return Ok(query.page_of(Vec::new(), total));
        };
        let dog_breeds = self
            .find_sorted(filter, Some(window.skip), Some(window.limit))
            .await?;
        debug!(
            total,
            returned = dog_breeds.len(),
            page = query.page,
            "directory page fetched"
        );
        Ok(query.page_of(dog_breeds, total))
    }

    async fn all(&self) -> Result<Vec<Breed>, CommonError> {
        self.find_sorted(Document::new(), None, None).await
    }

    async fn get(&self, id: &str) -> Result<Option<Breed>, CommonError> {
        let document = self.collection.find_one(id_filter(id)).await?;
        document.map(breed_from_document).transpose()
    }

    async fn ping(&self) -> Result<(), CommonError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("mongodb client closed");
    }
}

/// `skip`/`limit` as the driver sends them. Both are encoded as i64 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageWindow {
    skip: u64,
    limit: i64,
}

/// `None` when the page starts at or past the last match.
fn page_window(query: &CatalogQuery, total: u64) -> Option<PageWindow> {
    let offset = query.offset();
    if offset >= total {
        return None;
    }
    Some(PageWindow {
        skip: offset.min(i64::MAX as u64),
        limit: i64::try_from(query.limit).unwrap_or(i64::MAX),
    })
}

/// Case-insensitive substring match on name or temperament. The term is escaped so
/// user input never acts as a pattern.
fn search_filter(term: &str) -> Document {
    if term.is_empty() {
        return Document::new();
    }
    let pattern = regex::escape(term);
    doc! {
        "$or": [
            { NAME_FIELD: { "$regex": &pattern, "$options": "i" } },
            { TEMPERAMENT_FIELD: { "$regex": &pattern, "$options": "i" } },
        ]
    }
}

/// Identifiers are ObjectIds after a bulk import, but records may carry string ids.
fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": { "$in": [oid, id] } },
        Err(_) => doc! { "_id": id },
    }
}

fn breed_from_document(mut document: Document) -> Result<Breed, CommonError> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(other) => other.to_string(),
        None => return Err(CommonError::Document("record has no _id".to_string())),
    };
    let value = Bson::Document(document).into_relaxed_extjson();
    let mut breed: Breed = serde_json::from_value(value)
        .map_err(|e| CommonError::Document(format!("record {id}: {e}")))?;
    breed.id = id;
    Ok(breed)
}
