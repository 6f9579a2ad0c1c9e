use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. 开发环境默认值
    /// 2. ./config.toml
    /// 3. 环境变量（TOOLHUB_ 前缀，嵌套字段用 `__` 分隔）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TOOLHUB_").split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.generation.max_input_chars == 0 {
            return Err(ConfigValidationError::InvalidInputLimit);
        }

        let generation = &config.generation;
        for (name, steps) in [
            ("video_steps", generation.video_steps),
            ("avatar_steps", generation.avatar_steps),
            ("thumbnail_steps", generation.thumbnail_steps),
        ] {
            if steps == 0 {
                return Err(ConfigValidationError::InvalidSteps(name.to_string()));
            }
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("输入长度上限无效，必须大于 0")]
    InvalidInputLimit,

    #[error("进度步数无效: {0} 必须大于 0")]
    InvalidSteps(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
