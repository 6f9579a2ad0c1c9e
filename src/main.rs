use anyhow::Context;
use std::sync::Arc;
use toolhub::api::{self, app_state::AppState};
use toolhub::config::loader::ConfigLoader;
use toolhub::engine::ContentGenerator;
use toolhub::observability::{
    GenerationMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let metrics = Arc::new(GenerationMetrics::default());
    let generator = ContentGenerator::new(config.generation.clone());
    info!(
        "Content generator initialized (max input {} chars)",
        config.generation.max_input_chars
    );

    let app_state = AppState::from_generator(generator, metrics.clone());
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let api_router = api::initialize_api(app_state, &config.server).await?;
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
