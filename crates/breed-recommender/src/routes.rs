use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use breed_common::answers::AnswerSet;
use breed_common::catalog::CatalogQuery;
use breed_common::model::{BreedDetail, BreedPage, ScoredBreed};
use breed_common::questions::{Question, QUESTIONS};
use breed_common::scoring::{rank_breeds, TOP_N};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Raw directory query string. Values stay text so bad numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl DirectoryParams {
    fn query(&self) -> CatalogQuery {
        CatalogQuery::from_params(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.search.as_deref(),
        )
    }
}

/// `GET /api/dogBreeds`
pub async fn list_breeds(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> Result<Json<BreedPage>, AppError> {
    let query = params.query();
    let page = state
        .store
        .page(&query)
        .await
        .inspect_err(|e| error!(error = %e, page = query.page, "failed to fetch dog breeds"))
        .map_err(AppError::Fetch)?;
    Ok(Json(page))
}

/// `POST /api/dogBreeds`: the top matches for a set of quiz answers.
pub async fn recommend_breeds(
    State(state): State<AppState>,
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Result<Json<Vec<ScoredBreed>>, AppError> {
    let Json(answers) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected quiz answers");
        AppError::MalformedPayload(rejection.body_text())
    })?;

    if answers.is_empty() {
        debug!("no quiz answers, ranking on baseline traits only");
    }

    let catalog = state
        .catalog()
        .await
        .inspect_err(|e| error!(error = %e, "failed to load catalog for recommendations"))
        .map_err(AppError::Recommend)?;

    let candidates = catalog.len();
    let ranked = rank_breeds(catalog, &answers, TOP_N);
    info!(
        answers = answers.len(),
        candidates,
        returned = ranked.len(),
        "recommendations computed"
    );
    Ok(Json(ranked))
}

/// `GET /api/dogBreeds/{id}`
pub async fn get_breed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreedDetail>, AppError> {
    let breed = state
        .store
        .get(&id)
        .await
        .inspect_err(|e| error!(error = %e, id, "failed to fetch dog breed"))
        .map_err(AppError::Fetch)?
        .ok_or_else(|| AppError::NotFound(id))?;
    Ok(Json(BreedDetail::from(breed)))
}

/// `GET /api/questions`
pub async fn list_questions() -> Json<&'static [Question]> {
    Json(QUESTIONS)
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub store: bool,
    pub cache: bool,
}

/// `GET /api/health`: 503 when the store is unreachable. The cache is informational.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let store = state
        .store
        .ping()
        .await
        .inspect_err(|e| warn!(error = %e, "store ping failed"))
        .is_ok();
    let cache = state.cache.is_available().await;
    let status = if store {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(Health { store, cache }))
}
