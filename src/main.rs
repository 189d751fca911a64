mod aggregate;
mod bookmarks;
mod config;
mod fetcher;
mod highlight;
mod normalize;
mod routes;
mod sources;

use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::routes::AppState;
use crate::sources::SourceRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load_or_default("sources.toml")?;
    let registry = Arc::new(SourceRegistry::from_config(&config.sources));
    info!("Registered {} feed sources", registry.len());

    // Create fetcher
    let fetcher = Arc::new(Fetcher::new(
        registry.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
        &config.user_agent,
    ));

    // Initialize the bookmark store
    let bookmarks_url = std::env::var("BOOKMARKS_DB")
        .unwrap_or_else(|_| "sqlite:bookmarks.db?mode=rwc".to_string());
    let bookmarks = BookmarkStore::new(&bookmarks_url).await?;
    bookmarks.initialize().await?;
    info!("Bookmark store initialized");

    // Create app state
    let state = Arc::new(AppState {
        fetcher,
        bookmarks: Arc::new(bookmarks),
    });

    // Build router
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Server starting on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
