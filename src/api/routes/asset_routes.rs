//! Asset Routes

use crate::api::handlers::asset_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建素材路由器
pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets))
        .route("/assets/*key", get(get_asset))
}
