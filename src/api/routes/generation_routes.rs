//! Generation Routes
//!
//! 定义直接生成和后端辅助生成的 API 路由。

use crate::api::handlers::generation_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建生成路由器
pub fn create_generation_router() -> Router<AppState> {
    Router::new()
        .route("/generate/:tool", post(generate))
        .route("/generate-ai/video", post(generate_video_ai))
        .route("/generate-ai/text-image", post(generate_text_image))
}
