mod auth;
mod config;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;
mod store;
mod users;
mod validation;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::scoring::{JobScorer, WeightedJobScorer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Matcher API v{}", env!("CARGO_PKG_VERSION"));

    // One pool backs both repositories
    let store = Arc::new(PgStore::connect(&config.database_url).await?);

    let scorer: Arc<dyn JobScorer> = Arc::new(WeightedJobScorer::default());
    info!(
        "Job scorer: {} (top {} recommendations)",
        scorer.backend(),
        config.recommend_top_n
    );

    let state = AppState {
        jobs: store.clone(),
        users: store,
        scorer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
