use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::generation_dto::*, handlers::ensure_input_within_limit},
    error::AppError,
    models::result::{GenerationResult, ToolKind},
    services::backend::{TextImagePrompt, VideoPrompt},
};

/// 解析路径或请求体中的工具名
pub(crate) fn parse_tool(tool: &str) -> Result<ToolKind, AppError> {
    ToolKind::try_from(tool).map_err(AppError::Validation)
}

pub async fn generate(
    State(state): State<AppState>,
    Path(tool): Path<String>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tool = parse_tool(&tool)?;
    ensure_input_within_limit(&state, &request.input)?;
    debug!("Direct generation: tool={}", tool);

    let cancel = CancellationToken::new();
    let outcome = state
        .generator
        .generate(tool, &request.input, None, &cancel)
        .await;
    state.metrics.record_outcome(&outcome);

    Ok(Json(outcome?))
}

pub async fn generate_video_ai(
    State(state): State<AppState>,
    Json(request): Json<VideoAiRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_input_within_limit(&state, &request.topic)?;
    debug!("Backend video generation: topic={}", request.topic);

    let prompt = VideoPrompt {
        topic: request.topic,
        style: request.style,
        mood: request.mood,
        duration: request.duration,
    };
    let cancel = CancellationToken::new();
    let outcome = state
        .generator
        .generate_video_ai(&prompt, None, &cancel)
        .await
        .map(GenerationResult::Video);
    state.metrics.record_outcome(&outcome);

    Ok(Json(outcome?))
}

pub async fn generate_text_image(
    State(state): State<AppState>,
    Json(request): Json<TextImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_input_within_limit(&state, &request.text)?;
    debug!("Backend image generation: emotion={}", request.emotion);

    let prompt = TextImagePrompt {
        text: request.text,
        emotion: request.emotion,
        color_prefs: request.color_prefs,
    };
    let cancel = CancellationToken::new();
    let outcome = state
        .generator
        .generate_text_image(&prompt, None, &cancel)
        .await
        .map(GenerationResult::Image);
    state.metrics.record_outcome(&outcome);

    Ok(Json(outcome?))
}
