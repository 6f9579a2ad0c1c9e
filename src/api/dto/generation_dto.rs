//! 生成 DTO
//!
//! 定义生成、会话和素材相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::result::{GenerationResult, Partial};
use crate::models::session::{GenerationSession, GenerationStatus, SessionError};
use crate::services::backend::AssetEntry;

/// 直接生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// 用户输入
    pub input: String,
}

/// 会话内生成请求
#[derive(Debug, Deserialize)]
pub struct SessionGenerateRequest {
    /// 工具名（video、post、imagePrompt ...）
    pub tool: String,
    /// 用户输入
    pub input: String,
}

/// 后端视频生成请求
#[derive(Debug, Deserialize)]
pub struct VideoAiRequest {
    pub topic: String,
    #[serde(default = "default_video_style")]
    pub style: String,
    #[serde(default = "default_video_mood")]
    pub mood: String,
    /// 时长（分钟）
    #[serde(default = "default_video_duration")]
    pub duration: u32,
}

fn default_video_style() -> String {
    "cinematic".to_string()
}

fn default_video_mood() -> String {
    "upbeat".to_string()
}

fn default_video_duration() -> u32 {
    1
}

/// 后端文字图像生成请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextImageRequest {
    pub text: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub color_prefs: String,
}

/// 创建会话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// 会话 ID
    pub id: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 会话快照响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub status: GenerationStatus,
    pub tool: Option<String>,
    pub input: String,
    pub progress: u8,
    pub partial: Option<Partial>,
    pub result: Option<GenerationResult>,
    pub error: Option<SessionError>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GenerationSession> for SessionResponse {
    fn from(session: GenerationSession) -> Self {
        Self {
            id: session.id,
            status: session.status,
            tool: session.tool.map(|tool| tool.to_string()),
            input: session.input,
            progress: session.progress,
            partial: session.partial,
            result: session.result,
            error: session.error,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// 会话列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionResponse>,
    pub total: usize,
}

/// 素材列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetListResponse {
    pub assets: Vec<AssetEntry>,
    pub total: usize,
}
