use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::result::{GenerationResult, Partial, Progress, ToolKind};

/// 生成会话状态
///
/// `Idle → Running → {Completed | Failed | Cancelled}`，终态之后可以再次 `start`。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl GenerationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationStatus::Completed | GenerationStatus::Failed | GenerationStatus::Cancelled
        )
    }
}

/// 会话中记录的错误
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionError {
    pub kind: String,
    pub message: String,
    /// 是否提供重试入口
    pub retryable: bool,
}

impl From<&AppError> for SessionError {
    fn from(err: &AppError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}

/// 一次运行的句柄
///
/// `run` 用于丢弃上一次运行迟到的通知。
#[derive(Debug, Clone)]
pub struct RunHandle {
    pub run: u64,
    pub cancel: CancellationToken,
}

/// 生成会话
///
/// 同一会话同时只允许一次生成；终态之后到达的通知被忽略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSession {
    /// 会话唯一标识
    pub id: String,

    pub status: GenerationStatus,

    /// 最近一次生成的工具
    pub tool: Option<ToolKind>,

    /// 最近一次生成的输入
    pub input: String,

    /// 0-100
    pub progress: u8,

    pub partial: Option<Partial>,

    pub result: Option<GenerationResult>,

    pub error: Option<SessionError>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(skip)]
    run: u64,

    #[serde(skip)]
    cancel: Option<CancellationToken>,
}

impl GenerationSession {
    /// 创建新会话
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            status: GenerationStatus::Idle,
            tool: None,
            input: String::new(),
            progress: 0,
            partial: None,
            result: None,
            error: None,
            created_at: now,
            updated_at: now,
            run: 0,
            cancel: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GenerationStatus::Running
    }

    /// 开始一次生成
    ///
    /// 运行中再次调用返回 [`AppError::SessionBusy`]，会话不变。
    /// 空输入直接进入 `Failed`，不会产生任何进度。
    pub fn start(&mut self, tool: ToolKind, input: &str) -> Result<RunHandle> {
        if self.is_running() {
            return Err(AppError::SessionBusy(self.id.clone()));
        }

        self.run += 1;
        self.tool = Some(tool);
        self.input = input.to_string();
        self.progress = 0;
        self.partial = None;
        self.result = None;
        self.error = None;
        self.cancel = None;

        if input.trim().is_empty() {
            let err = AppError::empty_prompt();
            self.status = GenerationStatus::Failed;
            self.error = Some(SessionError::from(&err));
            self.touch();
            return Err(err);
        }

        let cancel = CancellationToken::new();
        self.status = GenerationStatus::Running;
        self.cancel = Some(cancel.clone());
        self.touch();

        Ok(RunHandle {
            run: self.run,
            cancel,
        })
    }

    /// 记录进度，返回是否被接受
    pub fn on_progress(&mut self, run: u64, update: Progress) -> bool {
        if !self.accepts(run) {
            return false;
        }
        self.progress = self.progress.max(update.percent);
        if update.partial.is_some() {
            self.partial = update.partial;
        }
        self.touch();
        true
    }

    pub fn complete(&mut self, run: u64, result: GenerationResult) -> bool {
        if !self.accepts(run) {
            return false;
        }
        self.status = GenerationStatus::Completed;
        self.progress = 100;
        self.result = Some(result);
        self.cancel = None;
        self.touch();
        true
    }

    pub fn fail(&mut self, run: u64, err: &AppError) -> bool {
        if !self.accepts(run) {
            return false;
        }
        self.status = if *err == AppError::Cancelled {
            GenerationStatus::Cancelled
        } else {
            GenerationStatus::Failed
        };
        self.error = Some(SessionError::from(err));
        self.cancel = None;
        self.touch();
        true
    }

    /// 取消进行中的生成，返回是否有生成被取消
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.status = GenerationStatus::Cancelled;
        self.error = Some(SessionError::from(&AppError::Cancelled));
        self.touch();
        true
    }

    /// 最近一次失败或取消是否可以重试
    pub fn can_retry(&self) -> bool {
        self.tool.is_some()
            && matches!(
                self.status,
                GenerationStatus::Failed | GenerationStatus::Cancelled
            )
    }

    fn accepts(&self, run: u64) -> bool {
        self.run == run && self.is_running()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::TextResult;

    fn text(value: &str) -> GenerationResult {
        GenerationResult::Text(TextResult {
            text: value.to_string(),
        })
    }

    #[test]
    fn test_start_twice_is_busy() {
        let mut session = GenerationSession::new();
        session.start(ToolKind::Post, "rust").unwrap();

        let err = session.start(ToolKind::Caption, "other").unwrap_err();
        assert!(matches!(err, AppError::SessionBusy(_)));
        assert_eq!(session.tool, Some(ToolKind::Post));
        assert_eq!(session.input, "rust");
    }

    #[test]
    fn test_blank_input_fails_without_progress() {
        let mut session = GenerationSession::new();
        let err = session.start(ToolKind::Post, "   ").unwrap_err();

        assert_eq!(err, AppError::empty_prompt());
        assert_eq!(session.status, GenerationStatus::Failed);
        assert_eq!(session.progress, 0);
        assert!(session.partial.is_none());
        assert_eq!(session.error.as_ref().unwrap().kind, "validation");
    }

    #[test]
    fn test_full_lifecycle() {
        let mut session = GenerationSession::new();
        let handle = session.start(ToolKind::Post, "rust").unwrap();

        assert!(session.on_progress(handle.run, Progress::text(50, "half")));
        assert_eq!(session.progress, 50);
        assert_eq!(session.partial, Some(Partial::Text("half".into())));

        assert!(session.complete(handle.run, text("done")));
        assert_eq!(session.status, GenerationStatus::Completed);
        assert_eq!(session.progress, 100);
    }

    #[test]
    fn test_updates_after_terminal_are_ignored() {
        let mut session = GenerationSession::new();
        let handle = session.start(ToolKind::Post, "rust").unwrap();
        assert!(session.cancel());
        assert!(handle.cancel.is_cancelled());

        assert!(!session.on_progress(handle.run, Progress::percent(80)));
        assert!(!session.complete(handle.run, text("late")));
        assert!(!session.fail(handle.run, &AppError::Cancelled));
        assert_eq!(session.status, GenerationStatus::Cancelled);
        assert!(session.result.is_none());
    }

    #[test]
    fn test_stale_run_is_ignored() {
        let mut session = GenerationSession::new();
        let first = session.start(ToolKind::Post, "one").unwrap();
        session.cancel();
        let second = session.start(ToolKind::Post, "two").unwrap();

        assert!(!session.on_progress(first.run, Progress::percent(90)));
        assert!(session.on_progress(second.run, Progress::percent(10)));
        assert_eq!(session.progress, 10);
    }

    #[test]
    fn test_retryable_failure() {
        let mut session = GenerationSession::new();
        let handle = session.start(ToolKind::Video, "launch").unwrap();
        let err = AppError::UpstreamApi("timeout".into());
        assert!(session.fail(handle.run, &err));

        assert!(session.can_retry());
        let error = session.error.as_ref().unwrap();
        assert!(error.retryable);
        assert_eq!(error.message, "API Error: timeout");
    }

    #[test]
    fn test_cancel_idle_session_is_noop() {
        let mut session = GenerationSession::new();
        assert!(!session.cancel());
        assert_eq!(session.status, GenerationStatus::Idle);
    }
}
