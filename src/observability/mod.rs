//! 可观测性模块
//!
//! 提供生成指标、健康检查和结构化日志。

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use crate::models::catalog::{AVATAR_CATALOG, THUMBNAIL_CATALOG, VIDEO_CATALOG};
use crate::models::result::GenerationResult;

// ===== Generation Metrics =====

/// 生成指标
#[derive(Debug, Default)]
pub struct GenerationMetrics {
    pub generations_total: AtomicU64,
    pub generations_failed: AtomicU64,
    pub generations_cancelled: AtomicU64,
    pub no_match_total: AtomicU64,
}

impl GenerationMetrics {
    /// 记录一次生成的结果
    pub fn record_outcome(&self, outcome: &Result<GenerationResult>) {
        self.generations_total.fetch_add(1, Ordering::SeqCst);
        match outcome {
            Ok(GenerationResult::Video(video)) if video.no_match => {
                self.no_match_total.fetch_add(1, Ordering::SeqCst);
            }
            Ok(_) => {}
            Err(AppError::Cancelled) => {
                self.generations_cancelled.fetch_add(1, Ordering::SeqCst);
            }
            Err(_) => {
                self.generations_failed.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// 由会话取消触发，生成任务随后的结果会被忽略
    pub fn record_cancelled(&self) {
        self.generations_total.fetch_add(1, Ordering::SeqCst);
        self.generations_cancelled.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP generations_total Total generation calls
# TYPE generations_total counter
generations_total {}
# HELP generations_failed Generation calls that ended with an error
# TYPE generations_failed counter
generations_failed {}
# HELP generations_cancelled Generation calls cancelled before completion
# TYPE generations_cancelled counter
generations_cancelled {}
# HELP no_match_total Video generations without a matching catalog record
# TYPE no_match_total counter
no_match_total {}
"#,
            self.generations_total.load(Ordering::SeqCst),
            self.generations_failed.load(Ordering::SeqCst),
            self.generations_cancelled.load(Ordering::SeqCst),
            self.no_match_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub checks: Vec<HealthCheck>,
}

/// 单个健康检查项
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: String,
    pub message: Option<String>,
}

impl HealthCheck {
    fn catalog(name: &str, len: usize) -> Self {
        Self {
            name: name.to_string(),
            status: if len > 0 { "healthy" } else { "unhealthy" }.to_string(),
            message: Some(format!("{} records", len)),
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<GenerationMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<GenerationMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let checks = vec![
        HealthCheck::catalog("video_catalog", VIDEO_CATALOG.len()),
        HealthCheck::catalog("avatar_catalog", AVATAR_CATALOG.len()),
        HealthCheck::catalog("thumbnail_catalog", THUMBNAIL_CATALOG.len()),
    ];
    let all_healthy = checks.iter().all(HealthCheck::is_healthy);

    let health_status = HealthStatus {
        status: if all_healthy { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        checks,
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health_status))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.gather())
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时额外按天滚动写入文件，
/// 返回的 guard 需要在进程退出前保持存活。
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},toolhub={}", config.level, config.level)));

    let console = if config.structured {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .boxed()
    };

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "toolhub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to initialize tracing: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::{TextResult, VideoResult};

    #[test]
    fn test_metrics_gather() {
        let metrics = GenerationMetrics::default();
        metrics.record_outcome(&Ok(GenerationResult::Text(TextResult {
            text: "hi".into(),
        })));
        metrics.record_outcome(&Err(AppError::empty_prompt()));
        metrics.record_outcome(&Err(AppError::Cancelled));

        let output = metrics.gather();
        assert!(output.contains("generations_total 3"));
        assert!(output.contains("generations_failed 1"));
        assert!(output.contains("generations_cancelled 1"));
        assert!(output.contains("no_match_total 0"));
    }

    #[test]
    fn test_session_cancel_counts_like_direct_cancel() {
        let direct = GenerationMetrics::default();
        direct.record_outcome(&Err(AppError::Cancelled));

        let session = GenerationMetrics::default();
        session.record_cancelled();

        assert_eq!(direct.gather(), session.gather());
        assert_eq!(session.generations_total.load(Ordering::SeqCst), 1);
        assert_eq!(session.generations_cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_match_counted() {
        let metrics = GenerationMetrics::default();
        metrics.record_outcome(&Ok(GenerationResult::Video(VideoResult {
            video_url: None,
            thumbnail: None,
            title: String::new(),
            description: String::new(),
            prompt_caption: String::new(),
            no_match: true,
        })));
        assert_eq!(metrics.no_match_total.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_catalog_health_check() {
        assert!(HealthCheck::catalog("video_catalog", 5).is_healthy());
        assert!(!HealthCheck::catalog("empty", 0).is_healthy());
    }
}
