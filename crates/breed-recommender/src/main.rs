use breed_common::redis::RedisCache;
use breed_recommender::cache::CatalogCache;
use breed_recommender::config::{CatalogSource, Config};
use breed_recommender::state::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env.local` first so it overrides `.env`; neither file is required.
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .init();

    info!("starting breed-recommender");

    // 1. Load config from environment
    let config = Config::from_env()?;
    let source = match &config.source {
        CatalogSource::Mongo { database, collection, .. } => format!("mongodb {database}.{collection}"),
        CatalogSource::JsonFile(path) => format!("file {}", path.display()),
    };
    info!(
        source,
        bind_addr = %config.bind_addr,
        redis = config.redis_url.is_some(),
        "configuration loaded"
    );

    // 2. Open the catalog store
    let store = breed_recommender::open_store(&config.source).await?;
    store.ping().await?;
    info!("catalog store reachable");

    // 3. Connect to Redis (optional, graceful degradation if unavailable)
    let redis_cache = RedisCache::new(config.redis_url.as_deref());
    if !redis_cache.is_configured() {
        info!("REDIS_URL not set, running without cache");
    } else if redis_cache.is_available().await {
        info!("redis connected");
    } else {
        warn!("redis unavailable, running without cache");
    }
    let cache = CatalogCache::new(redis_cache, config.cache_ttl_secs);
    cache.invalidate().await;

    // 4. Serve HTTP until Ctrl+C / SIGTERM
    let state = AppState::new(store, cache);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    breed_recommender::serve(listener, state, breed_recommender::shutdown_signal()).await?;
    info!("server shut down");
    Ok(())
}
