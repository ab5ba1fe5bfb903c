mod animation;
mod assets;
mod config;
mod content;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::animation::{AnimationSource, LottieClient, NoopAnimation};
use crate::assets::AssetStore;
use crate::config::Config;
use crate::content::load_portfolio;
use crate::render::Effects;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is built once and shared read-only for the life of the process
    let portfolio = Arc::new(load_portfolio(config.content_path.as_deref()).await?);

    let assets = AssetStore::from_config(&config);
    info!("Assets directory: {}", config.assets_dir.display());

    let animation: Arc<dyn AnimationSource> = match &config.animation_url {
        Some(url) => {
            info!("Animation enabled (source: {url})");
            Arc::new(LottieClient::new(url.clone(), config.animation_timeout)?)
        }
        None => Arc::new(NoopAnimation),
    };

    let state = AppState {
        portfolio,
        assets,
        animation,
        effects: Effects {
            confetti: config.enable_confetti,
        },
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
