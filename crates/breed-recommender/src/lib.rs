//! Dog breed directory and quiz recommendation service.
//!
//! `GET /api/dogBreeds` pages through the catalog, `POST /api/dogBreeds` scores the
//! whole catalog against quiz answers and returns the best matches.
pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use breed_common::store::{BreedStore, MemoryStore, MongoStore};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::CatalogSource;
use error::AppError;
use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/dogBreeds",
            get(routes::list_breeds).post(routes::recommend_breeds),
        )
        .route("/api/dogBreeds/{id}", get(routes::get_breed))
        .route("/api/questions", get(routes::list_questions))
        .route("/api/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Build the configured catalog backend.
pub async fn open_store(source: &CatalogSource) -> Result<Arc<dyn BreedStore>, AppError> {
    let store: Arc<dyn BreedStore> = match source {
        CatalogSource::Mongo {
            uri,
            database,
            collection,
        } => Arc::new(MongoStore::connect(uri, database, collection).await?),
        CatalogSource::JsonFile(path) => Arc::new(MemoryStore::from_json_file(path).await?),
    };
    Ok(store)
}

/// Serve until `shutdown` resolves, then close the store once in-flight requests drain.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let store = Arc::clone(&state.store);
    let result = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await;
    store.close().await;
    result
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
