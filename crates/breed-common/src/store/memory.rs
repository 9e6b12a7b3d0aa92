use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use tracing::{info, warn};

use super::BreedStore;
use crate::catalog::CatalogQuery;
use crate::error::CommonError;
use crate::model::{Breed, BreedPage};

/// A catalog held entirely in memory, typically loaded from the `dog_breeds.json`
/// export (a JSON array of breed objects).
pub struct MemoryStore {
    breeds: Vec<Breed>,
}

impl MemoryStore {
    /// Records without an identifier get their zero-padded position in `breeds`,
    /// bumped past any identifier already taken, then the catalog is ordered by
    /// identifier.
    pub fn new(mut breeds: Vec<Breed>) -> Self {
        let width = breeds.len().to_string().len().max(4);
        let mut taken: HashSet<String> = breeds
            .iter()
            .filter(|b| !b.id.is_empty())
            .map(|b| b.id.clone())
            .collect();
        for (position, breed) in breeds.iter_mut().enumerate() {
            if !breed.id.is_empty() {
                continue;
            }
            let mut candidate = position;
            let mut id = format!("{candidate:0width$}");
            while taken.contains(&id) {
                candidate += 1;
                id = format!("{candidate:0width$}");
            }
            taken.insert(id.clone());
            breed.id = id;
        }
        breeds.sort_by(|a, b| a.id.cmp(&b.id));
        Self { breeds }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CommonError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let breeds: Vec<Breed> = serde_json::from_str(&raw)?;
        let store = Self::new(breeds);
        if store.is_empty() {
            warn!(path = %path.display(), "catalog file has no breeds");
        }
        info!(path = %path.display(), count = store.len(), "catalog loaded from file");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

#[async_trait]
impl BreedStore for MemoryStore {
    async fn page(&self, query: &CatalogQuery) -> Result<BreedPage, CommonError> {
        Ok(query.paginate(&self.breeds))
    }

    async fn all(&self) -> Result<Vec<Breed>, CommonError> {
        Ok(self.breeds.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Breed>, CommonError> {
        Ok(self.breeds.iter().find(|b| b.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), CommonError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    fn breed(value: serde_json::Value) -> Breed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_assigns_ids_and_sorts() {
        let store = MemoryStore::new(vec![
            breed(json!({"Dog Name": "Akita"})),
            breed(json!({"_id": "0000-explicit", "Dog Name": "Boxer"})),
            breed(json!({"Dog Name": "Collie"})),
        ]);
        let ids: Vec<&str> = store.breeds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["0000", "0000-explicit", "0002"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_generated_ids_skip_explicit_ones() {
        let store = MemoryStore::new(vec![
            breed(json!({"_id": "0002", "Dog Name": "Akita"})),
            breed(json!({"_id": "0003", "Dog Name": "Boxer"})),
            breed(json!({"Dog Name": "Collie"})),
            breed(json!({"Dog Name": "Dachshund"})),
        ]);
        let ids: Vec<(&str, &str)> = store
            .breeds
            .iter()
            .map(|b| (b.id.as_str(), b.name()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("0002", "Akita"),
                ("0003", "Boxer"),
                ("0004", "Collie"),
                ("0005", "Dachshund"),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_finds_each_record_by_unique_id() {
        let store = MemoryStore::new(vec![
            breed(json!({"Dog Name": "Akita"})),
            breed(json!({"_id": "0001", "Dog Name": "Boxer"})),
            breed(json!({"Dog Name": "Collie"})),
        ]);
        let all = store.all().await.unwrap();
        let unique: HashSet<&str> = all.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
        for expected in &all {
            let found = store.get(&expected.id).await.unwrap().unwrap();
            assert_eq!(found.name(), expected.name());
        }
    }

    #[tokio::test]
    async fn test_empty_export_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        let store = MemoryStore::from_json_file(file.path()).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_loads_json_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let export = json!([
            {"Dog Name": "Beagle", "Temperament": "Merry", "Size": "2"},
            {"Dog Name": "Boxer", "Temperament": "Playful", "Size": "4"},
        ]);
        file.write_all(export.to_string().as_bytes()).unwrap();

        let store = MemoryStore::from_json_file(file.path()).await.unwrap();
        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name(), "Beagle");

        let beagle = store.get(&all[0].id).await.unwrap().unwrap();
        assert_eq!(beagle.attribute_str("Size"), Some("2"));
        assert!(store.get("missing").await.unwrap().is_none());
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MemoryStore::from_json_file(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(CommonError::CatalogFile(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();
        let result = MemoryStore::from_json_file(file.path()).await;
        assert!(matches!(result, Err(CommonError::CatalogDecode(_))));
    }

    #[tokio::test]
    async fn test_page_searches_and_slices() {
        let breeds = (0..20)
            .map(|i| {
                let temperament = if i % 2 == 0 { "Gentle" } else { "Bold" };
                breed(json!({"Dog Name": format!("Dog {i}"), "Temperament": temperament}))
            })
            .collect();
        let store = MemoryStore::new(breeds);

        let query = CatalogQuery::from_params(Some("2"), Some("4"), Some("gentle"));
        let page = store.page(&query).await.unwrap();
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 3);
        let names: Vec<&str> = page.dog_breeds.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Dog 8", "Dog 10", "Dog 12", "Dog 14"]);
    }
}
