use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 是否允许跨域
    pub cors_enabled: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

/// 生成引擎配置
///
/// 所有延迟均为毫秒。延迟只用于模拟实时生成体验，
/// 设为 0 时引擎立即返回（测试使用 [`GenerationConfig::instant`]）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// 输入最大字符数（由 API 层校验）
    pub max_input_chars: usize,
    /// 文本类工具开始渲染前的延迟
    pub text_start_delay_ms: u64,
    /// 帖子逐词延迟
    pub post_word_delay_ms: u64,
    /// 消息逐词延迟
    pub message_word_delay_ms: u64,
    /// 图像提示词逐词延迟
    pub image_prompt_word_delay_ms: u64,
    /// 配文逐词延迟
    pub caption_word_delay_ms: u64,
    /// 脚本逐词延迟
    pub script_word_delay_ms: u64,
    /// 脚本段落之间的停顿
    pub script_section_pause_ms: u64,
    /// 逐词延迟的随机抖动上限
    pub word_jitter_ms: u64,
    /// 百分比进度每步延迟
    pub step_delay_ms: u64,
    /// 视频生成进度步数
    pub video_steps: u32,
    /// 头像生成进度步数
    pub avatar_steps: u32,
    /// 缩略图生成进度步数
    pub thumbnail_steps: u32,
    /// 后端辅助生成各阶段之间的停顿
    pub backend_stage_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 500,
            text_start_delay_ms: 500,
            post_word_delay_ms: 15,
            message_word_delay_ms: 15,
            image_prompt_word_delay_ms: 20,
            caption_word_delay_ms: 15,
            script_word_delay_ms: 15,
            script_section_pause_ms: 300,
            word_jitter_ms: 10,
            step_delay_ms: 150,
            video_steps: 10,
            avatar_steps: 8,
            thumbnail_steps: 10,
            backend_stage_delay_ms: 500,
        }
    }
}

impl GenerationConfig {
    /// 无延迟配置
    pub fn instant() -> Self {
        Self {
            text_start_delay_ms: 0,
            post_word_delay_ms: 0,
            message_word_delay_ms: 0,
            image_prompt_word_delay_ms: 0,
            caption_word_delay_ms: 0,
            script_word_delay_ms: 0,
            script_section_pause_ms: 0,
            word_jitter_ms: 0,
            step_delay_ms: 0,
            backend_stage_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn text_start_delay(&self) -> Duration {
        Duration::from_millis(self.text_start_delay_ms)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn section_pause(&self) -> Duration {
        Duration::from_millis(self.script_section_pause_ms)
    }

    pub fn backend_stage_delay(&self) -> Duration {
        Duration::from_millis(self.backend_stage_delay_ms)
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 生成引擎配置
    pub generation: GenerationConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                cors_enabled: true,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            generation: GenerationConfig::default(),
            app_name: "toolhub".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.logging.log_dir = Some(PathBuf::from("./logs"));
        config.server.cors_enabled = false;
        config
    }
}
