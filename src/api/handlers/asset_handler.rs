use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    api::{app_state::AppState, dto::generation_dto::AssetListResponse},
    error::AppError,
};

pub async fn list_assets(State(state): State<AppState>) -> impl IntoResponse {
    let assets = state.assets.list_assets();
    Json(AssetListResponse {
        total: assets.len(),
        assets,
    })
}

pub async fn get_asset(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .assets
        .get_asset(&key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Asset not found: {}", key)))
}
