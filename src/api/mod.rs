//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::config::ServerConfig;
use crate::error::AppError;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::generation_routes::create_generation_router())
        .merge(routes::session_routes::create_session_router())
        .merge(routes::asset_routes::create_asset_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn initialize_api(app_state: AppState, server: &ServerConfig) -> Result<Router, AppError> {
    tracing::info!("Initializing API router...");
    let router = create_router(app_state);
    if server.cors_enabled {
        return Ok(router.layer(CorsLayer::permissive()));
    }
    Ok(router)
}
