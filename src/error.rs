//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 输入校验失败（空输入、超长输入、未知工具）
    #[error("{0}")]
    Validation(String),

    /// 后端方法不存在，提示需要接入的集成
    #[error(
        "{capability} generation API is not yet available. The backend needs to implement the {method} method with {integration} integration."
    )]
    UpstreamUnavailable {
        capability: String,
        method: String,
        integration: String,
    },

    /// 上游服务调用失败
    #[error("API Error: {0}")]
    UpstreamApi(String),

    /// 会话已有进行中的生成
    #[error("生成进行中，请稍后再试: {0}")]
    SessionBusy(String),

    /// 生成被取消
    #[error("生成已取消")]
    Cancelled,

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(String),
}

impl AppError {
    /// 空输入时返回给用户的提示
    pub fn empty_prompt() -> Self {
        AppError::Validation("Please enter a prompt to generate content.".to_string())
    }

    /// 是否提供重试入口
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamUnavailable { .. } | AppError::UpstreamApi(_)
        )
    }

    /// 错误类别名称，用于会话快照
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::UpstreamUnavailable { .. } => "upstream_unavailable",
            AppError::UpstreamApi(_) => "upstream_api",
            AppError::SessionBusy(_) => "session_busy",
            AppError::Cancelled => "cancelled",
            AppError::NotFound(_) => "not_found",
            AppError::Config(_) => "config",
            AppError::Serialization(_) => "serialization",
            AppError::Internal(_) => "internal",
            AppError::Io(_) => "io",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::SessionBusy(_) => (409, "CONFLICT".to_string()),
            AppError::UpstreamUnavailable { .. } => (503, "SERVICE_UNAVAILABLE".to_string()),
            AppError::UpstreamApi(_) => (502, "UPSTREAM_ERROR".to_string()),
            AppError::Cancelled => (499, "CANCELLED".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_api_prefix() {
        let err = AppError::UpstreamApi("quota exceeded".to_string());
        assert_eq!(err.to_string(), "API Error: quota exceeded");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_upstream_unavailable_names_integration() {
        let err = AppError::UpstreamUnavailable {
            capability: "Image".to_string(),
            method: "generateTextImage".to_string(),
            integration: "OpenAI".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Image generation API is not yet available. The backend needs to implement the generateTextImage method with OpenAI integration."
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_status_mapping() {
        let (status, code): (u16, String) = (&AppError::empty_prompt()).into();
        assert_eq!(status, 400);
        assert_eq!(code, "BAD_REQUEST");

        let (status, _): (u16, String) = (&AppError::SessionBusy("s1".into())).into();
        assert_eq!(status, 409);
        assert!(!AppError::empty_prompt().is_retryable());
    }
}
