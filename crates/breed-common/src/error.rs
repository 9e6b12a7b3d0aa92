/// Error types shared by the breed catalog crates.
///
/// These cover the infrastructure the catalog sits on (document store, catalog files).
/// Redis failures never surface here: the cache degrades to a miss instead.
/// Server-specific errors wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("malformed breed document: {0}")]
    Document(String),

    #[error("catalog file error: {0}")]
    CatalogFile(#[from] std::io::Error),

    #[error("catalog decode error: {0}")]
    CatalogDecode(#[from] serde_json::Error),
}
