//! 会话服务
//!
//! 管理生成会话的生命周期：每个会话同时只有一次生成在后台任务中运行，
//! 删除会话会取消进行中的生成。

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::engine::ContentGenerator;
use crate::error::{AppError, Result};
use crate::models::result::{Progress, ToolKind};
use crate::models::session::{GenerationSession, RunHandle};
use crate::observability::GenerationMetrics;

/// 会话服务 trait
#[async_trait]
pub trait SessionService: Send + Sync {
    /// 创建会话
    async fn create(&self) -> Result<GenerationSession>;

    /// 根据 ID 获取会话快照
    async fn get(&self, id: &str) -> Result<Option<GenerationSession>>;

    /// 列出会话（按创建时间排序）
    async fn list(&self) -> Result<Vec<GenerationSession>>;

    /// 在会话中开始一次生成，立即返回运行中的快照
    async fn start_generation(
        &self,
        id: &str,
        tool: ToolKind,
        input: &str,
    ) -> Result<GenerationSession>;

    /// 用上一次的工具和输入重新生成
    async fn retry(&self, id: &str) -> Result<GenerationSession>;

    /// 取消进行中的生成
    async fn cancel(&self, id: &str) -> Result<GenerationSession>;

    /// 删除会话
    async fn remove(&self, id: &str) -> Result<bool>;
}

/// 会话服务实现
pub struct SessionServiceImpl {
    sessions: Arc<DashMap<String, GenerationSession>>,
    generator: Arc<ContentGenerator>,
    metrics: Arc<GenerationMetrics>,
}

impl SessionServiceImpl {
    /// 创建新的服务实例
    pub fn new(generator: Arc<ContentGenerator>, metrics: Arc<GenerationMetrics>) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            generator,
            metrics,
        }
    }

    fn snapshot(&self, id: &str) -> Result<GenerationSession> {
        self.sessions
            .get(id)
            .map(|session| session.clone())
            .ok_or_else(|| not_found(id))
    }

    /// 启动后台生成任务
    fn spawn_generation(&self, id: &str, tool: ToolKind, input: String, handle: RunHandle) {
        let sessions = Arc::clone(&self.sessions);
        let generator = Arc::clone(&self.generator);
        let metrics = Arc::clone(&self.metrics);
        let id = id.to_string();

        tokio::spawn(async move {
            let on_progress = |update: Progress| {
                if let Some(mut session) = sessions.get_mut(&id) {
                    session.on_progress(handle.run, update);
                }
            };

            let outcome = generator
                .generate(tool, &input, Some(&on_progress), &handle.cancel)
                .await;

            let applied = match sessions.get_mut(&id) {
                Some(mut session) => match &outcome {
                    Ok(result) => session.complete(handle.run, result.clone()),
                    Err(err) => session.fail(handle.run, err),
                },
                None => false,
            };

            // 已被会话取消的运行在 cancel() 中计数
            if applied {
                metrics.record_outcome(&outcome);
            }
            debug!(session_id = %id, run = handle.run, applied, "生成任务结束");
        });
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    async fn create(&self) -> Result<GenerationSession> {
        let session = GenerationSession::new();
        info!(session_id = %session.id, "创建会话");
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn get(&self, id: &str) -> Result<Option<GenerationSession>> {
        Ok(self.sessions.get(id).map(|session| session.clone()))
    }

    async fn list(&self) -> Result<Vec<GenerationSession>> {
        let mut sessions: Vec<GenerationSession> = self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        sessions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(sessions)
    }

    async fn start_generation(
        &self,
        id: &str,
        tool: ToolKind,
        input: &str,
    ) -> Result<GenerationSession> {
        let (handle, snapshot) = {
            let mut session = self.sessions.get_mut(id).ok_or_else(|| not_found(id))?;
            let handle = session.start(tool, input)?;
            (handle, session.clone())
        };

        info!(session_id = %id, tool = %tool, run = handle.run, "会话开始生成");
        self.spawn_generation(id, tool, input.to_string(), handle);
        Ok(snapshot)
    }

    async fn retry(&self, id: &str) -> Result<GenerationSession> {
        let (tool, input) = {
            let session = self.sessions.get(id).ok_or_else(|| not_found(id))?;
            match session.tool {
                Some(tool) if session.can_retry() => (tool, session.input.clone()),
                _ => {
                    return Err(AppError::Validation(
                        "Nothing to retry: the session has no failed or cancelled generation"
                            .to_string(),
                    ));
                }
            }
        };

        info!(session_id = %id, tool = %tool, "重试生成");
        self.start_generation(id, tool, &input).await
    }

    async fn cancel(&self, id: &str) -> Result<GenerationSession> {
        let mut session = self.sessions.get_mut(id).ok_or_else(|| not_found(id))?;
        if session.cancel() {
            self.metrics.record_cancelled();
            info!(session_id = %id, "取消生成");
        }
        Ok(session.clone())
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        match self.sessions.remove(id) {
            Some((_, mut session)) => {
                if session.cancel() {
                    self.metrics.record_cancelled();
                }
                info!(session_id = %id, "删除会话");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Session not found: {}", id))
}

/// 创建会话服务
pub fn create_session_service(
    generator: Arc<ContentGenerator>,
    metrics: Arc<GenerationMetrics>,
) -> Box<dyn SessionService> {
    Box::new(SessionServiceImpl::new(generator, metrics))
}
