use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::AppState,
        dto::generation_dto::*,
        handlers::{ensure_input_within_limit, generation_handler::parse_tool},
    },
    error::AppError,
};

fn session_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Session not found: {}", id))
}

pub async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = state.session_service.create().await?;
    debug!("Created session: {}", session.id);

    let response = CreateSessionResponse {
        id: session.id,
        created_at: session.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sessions: Vec<SessionResponse> = state
        .session_service
        .list()
        .await?
        .into_iter()
        .map(SessionResponse::from)
        .collect();

    let response = SessionListResponse {
        total: sessions.len(),
        sessions,
    };

    Ok(Json(response))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting session: {}", id);

    let session = state
        .session_service
        .get(&id)
        .await?
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(SessionResponse::from(session)))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting session: {}", id);

    if state.session_service.remove(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}

pub async fn start_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SessionGenerateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tool = parse_tool(&request.tool)?;
    ensure_input_within_limit(&state, &request.input)?;
    debug!("Session {} generating with {}", id, tool);

    let session = state
        .session_service
        .start_generation(&id, tool, &request.input)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(SessionResponse::from(session))))
}

pub async fn retry_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Retrying session: {}", id);

    let session = state.session_service.retry(&id).await?;
    Ok((StatusCode::ACCEPTED, Json(SessionResponse::from(session))))
}

pub async fn cancel_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Cancelling session: {}", id);

    let session = state.session_service.cancel(&id).await?;
    Ok(Json(SessionResponse::from(session)))
}
