/// Directory query parameters and pagination math.
///
/// Shared by every store so the Mongo and in-memory backends agree on defaults,
/// matching and page arithmetic.
use crate::model::{Breed, BreedPage};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub page: u64,
    pub limit: u64,
    /// Trimmed; empty matches everything.
    pub search: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
        }
    }
}

impl CatalogQuery {
    /// Build a query from raw query-string values. Missing, non-numeric, zero or
    /// negative numbers fall back to their defaults.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, search: Option<&str>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
            search: search.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Case-insensitive substring match on name or temperament.
    pub fn matches(&self, breed: &Breed) -> bool {
        if !self.has_search() {
            return true;
        }
        let needle = self.search.to_lowercase();
        breed.name().to_lowercase().contains(&needle)
            || breed.temperament().to_lowercase().contains(&needle)
    }

    /// Assemble the response envelope around an already sliced page.
    pub fn page_of(&self, dog_breeds: Vec<Breed>, total: u64) -> BreedPage {
        BreedPage {
            dog_breeds,
            total,
            page: self.page,
            limit: self.limit,
            total_pages: total.div_ceil(self.limit),
        }
    }

    /// Filter and slice a catalog already ordered by identifier.
    pub fn paginate(&self, catalog: &[Breed]) -> BreedPage {
        let matching: Vec<&Breed> = catalog.iter().filter(|b| self.matches(b)).collect();
        let total = matching.len() as u64;
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);

        let dog_breeds = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        self.page_of(dog_breeds, total)
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog(count: usize) -> Vec<Breed> {
        (0..count)
            .map(|i| {
                serde_json::from_value(json!({
                    "_id": format!("{i:03}"),
                    "Dog Name": format!("Breed {i}"),
                }))
                .unwrap()
            })
            .collect()
    }

    fn named(id: &str, name: &str, temperament: &str) -> Breed {
        serde_json::from_value(json!({
            "_id": id,
            "Dog Name": name,
            "Temperament": temperament,
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_when_params_missing_or_invalid() {
        assert_eq!(CatalogQuery::from_params(None, None, None), CatalogQuery::default());
        let bad = CatalogQuery::from_params(Some("abc"), Some("-5"), Some("   "));
        assert_eq!(bad.page, DEFAULT_PAGE);
        assert_eq!(bad.limit, DEFAULT_LIMIT);
        assert!(!bad.has_search());

        let zero = CatalogQuery::from_params(Some("0"), Some("0"), None);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.limit, 12);
        assert_eq!(zero.offset(), 0);
    }

    #[test]
    fn test_explicit_params_are_used() {
        let query = CatalogQuery::from_params(Some("3"), Some("5"), Some(" retriever "));
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 5);
        assert_eq!(query.search, "retriever");
        assert_eq!(query.offset(), 10);
    }

    #[test]
    fn test_offset_saturates() {
        let query = CatalogQuery {
            page: u64::MAX,
            limit: u64::MAX,
            search: String::new(),
        };
        assert_eq!(query.offset(), u64::MAX);
    }

    #[test]
    fn test_first_page_of_default_directory() {
        let page = CatalogQuery::default().paginate(&catalog(30));
        assert_eq!(page.dog_breeds.len(), 12);
        assert_eq!(page.total, 30);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.dog_breeds[0].id, "000");
    }

    #[test]
    fn test_last_page_is_partial() {
        let query = CatalogQuery::from_params(Some("3"), None, None);
        let page = query.paginate(&catalog(30));
        let ids: Vec<&str> = page.dog_breeds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["024", "025", "026", "027", "028", "029"]);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let query = CatalogQuery::from_params(Some("9"), Some("12"), None);
        let page = query.paginate(&catalog(30));
        assert!(page.dog_breeds.is_empty());
        assert_eq!(page.total, 30);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_temperament() {
        let catalog = vec![
            named("1", "Golden Retriever", "Friendly, Reliable"),
            named("2", "Labrador Retriever", "Outgoing"),
            named("3", "Chihuahua", "Charming, Sassy"),
            named("4", "Beagle", "Merry, FRIENDLY"),
        ];

        let by_name = CatalogQuery::from_params(None, None, Some("RETRIEVER")).paginate(&catalog);
        assert_eq!(by_name.total, 2);

        let by_temperament = CatalogQuery::from_params(None, None, Some("friendly"))
            .paginate(&catalog);
        let ids: Vec<&str> = by_temperament.dog_breeds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        let none = CatalogQuery::from_params(None, None, Some("xyz")).paginate(&catalog);
        assert_eq!(none.total, 0);
        assert_eq!(none.total_pages, 0);
        assert!(none.dog_breeds.is_empty());
    }

    #[test]
    fn test_search_treats_pattern_characters_literally() {
        let catalog = vec![named("1", "Pug", "Loving (mostly)")];
        let query = CatalogQuery::from_params(None, None, Some("(mostly"));
        assert_eq!(query.paginate(&catalog).total, 1);
        let wildcard = CatalogQuery::from_params(None, None, Some(".*"));
        assert_eq!(wildcard.paginate(&catalog).total, 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let query = CatalogQuery::from_params(None, Some("5"), None);
        assert_eq!(query.page_of(vec![], 11).total_pages, 3);
        assert_eq!(query.page_of(vec![], 10).total_pages, 2);
        assert_eq!(query.page_of(vec![], 0).total_pages, 0);
    }
}
