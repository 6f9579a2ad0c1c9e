//! 后端执行器与素材注册表
//!
//! 真实的视频/图像生成由外部服务完成，本仓库只描述接口。
//! [`UnavailableBackend`] 对两个生成方法都返回 [`AppError::UpstreamUnavailable`]。

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::catalog::{AVATAR_CATALOG, THUMBNAIL_CATALOG, VIDEO_CATALOG};

/// RunwayML 视频生成方法名
pub const VIDEO_METHOD: &str = "generateVideoAI";
/// OpenAI 图像生成方法名
pub const IMAGE_METHOD: &str = "generateTextImage";

/// 视频生成请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPrompt {
    pub topic: String,
    pub style: String,
    pub mood: String,
    /// 时长（分钟）
    pub duration: u32,
}

/// 文字图像生成请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextImagePrompt {
    pub text: String,
    pub emotion: String,
    pub color_prefs: String,
}

/// 后端返回的视频
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedVideo {
    pub title: Option<String>,
    /// URL、data URI 或素材路径
    pub content: Option<String>,
}

/// 后端返回的图像
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedImage {
    pub content: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
}

/// 外部生成服务
#[async_trait]
pub trait BackendActor: Send + Sync {
    async fn generate_video_ai(&self, prompt: &VideoPrompt) -> Result<GeneratedVideo>;

    async fn generate_text_image(&self, prompt: &TextImagePrompt) -> Result<GeneratedImage>;

    async fn build_video_prompt(&self, prompt: &VideoPrompt) -> Result<String> {
        Ok(format!(
            "Create a {}-minute {} video about {} with a {} mood.",
            prompt.duration, prompt.style, prompt.topic, prompt.mood
        ))
    }

    async fn build_thumbnail_prompt(&self, prompt: &TextImagePrompt) -> Result<String> {
        Ok(format!(
            "Design a bold thumbnail with the text \"{}\", conveying {} emotion, using a {} color scheme.",
            prompt.text, prompt.emotion, prompt.color_prefs
        ))
    }
}

/// 未接入任何外部服务的后端
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

#[async_trait]
impl BackendActor for UnavailableBackend {
    async fn generate_video_ai(&self, _prompt: &VideoPrompt) -> Result<GeneratedVideo> {
        Err(AppError::UpstreamUnavailable {
            capability: "Video".to_string(),
            method: VIDEO_METHOD.to_string(),
            integration: "RunwayML".to_string(),
        })
    }

    async fn generate_text_image(&self, _prompt: &TextImagePrompt) -> Result<GeneratedImage> {
        Err(AppError::UpstreamUnavailable {
            capability: "Image".to_string(),
            method: IMAGE_METHOD.to_string(),
            integration: "OpenAI".to_string(),
        })
    }
}

/// 把后端错误归类
///
/// 不可用、已是上游错误、取消三种原样返回，其余一律包装为
/// [`AppError::UpstreamApi`]，保留原始消息。
pub fn classify_backend_error(err: AppError) -> AppError {
    match err {
        AppError::UpstreamUnavailable { .. } | AppError::UpstreamApi(_) | AppError::Cancelled => {
            err
        }
        AppError::Validation(message)
        | AppError::SessionBusy(message)
        | AppError::NotFound(message)
        | AppError::Config(message)
        | AppError::Serialization(message)
        | AppError::Internal(message)
        | AppError::Io(message) => AppError::UpstreamApi(message),
    }
}

/// 素材条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetEntry {
    /// 文件名
    pub key: String,
    /// 完整路径
    pub path: String,
}

/// 目录引用的所有素材
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    assets: BTreeMap<String, String>,
}

impl AssetRegistry {
    /// 从三个内置目录收集素材路径
    pub fn from_catalogs() -> Self {
        let paths = VIDEO_CATALOG
            .iter()
            .flat_map(|record| [record.video_url, record.thumbnail])
            .chain(AVATAR_CATALOG.iter().map(|record| record.image))
            .chain(THUMBNAIL_CATALOG.iter().map(|record| record.image));

        Self::from_paths(paths)
    }

    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let assets = paths
            .into_iter()
            .map(|path| (asset_key(path).to_string(), path.to_string()))
            .collect();
        Self { assets }
    }

    /// 按键排序列出全部素材
    pub fn list_assets(&self) -> Vec<AssetEntry> {
        self.assets
            .iter()
            .map(|(key, path)| AssetEntry {
                key: key.clone(),
                path: path.clone(),
            })
            .collect()
    }

    pub fn get_asset(&self, key: &str) -> Option<AssetEntry> {
        let key = key.trim_start_matches('/');
        self.assets
            .get(key)
            .or_else(|| self.assets.get(asset_key(key)))
            .map(|path| AssetEntry {
                key: asset_key(path).to_string(),
                path: path.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::from_catalogs()
    }
}

fn asset_key(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn test_unavailable_backend_names_integration() {
        let backend = UnavailableBackend;
        let prompt = VideoPrompt {
            topic: "launch".into(),
            style: "cinematic".into(),
            mood: "upbeat".into(),
            duration: 1,
        };

        let err = backend.generate_video_ai(&prompt).await.unwrap_err();
        assert!(err.to_string().starts_with("Video generation API is not yet available"));
        assert!(err.to_string().contains("generateVideoAI method with RunwayML"));

        let err = backend
            .generate_text_image(&TextImagePrompt {
                text: "hi".into(),
                emotion: "joy".into(),
                color_prefs: "warm".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("OpenAI"));
    }

    #[tokio::test]
    async fn test_default_prompt_builders() {
        let backend = UnavailableBackend;
        let prompt = VideoPrompt {
            topic: "coffee".into(),
            style: "documentary".into(),
            mood: "calm".into(),
            duration: 2,
        };
        let built = backend.build_video_prompt(&prompt).await.unwrap();
        assert!(built.contains("2-minute documentary"));
        assert!(built.contains("coffee"));
    }

    #[rstest]
    #[case(AppError::Internal("provider rate limit exceeded".into()), "provider rate limit exceeded")]
    #[case(AppError::Io("connection reset by peer".into()), "connection reset by peer")]
    #[case(AppError::Internal("OpenAI API quota".into()), "OpenAI API quota")]
    fn test_provider_failures_become_api_errors(#[case] err: AppError, #[case] message: &str) {
        let wrapped = classify_backend_error(err);

        assert_eq!(wrapped, AppError::UpstreamApi(message.to_string()));
        assert_eq!(wrapped.to_string(), format!("API Error: {}", message));
        assert!(wrapped.is_retryable());
    }

    #[test]
    fn test_classify_keeps_unavailable_and_cancelled() {
        let unavailable = AppError::UpstreamUnavailable {
            capability: "Video".into(),
            method: VIDEO_METHOD.into(),
            integration: "RunwayML".into(),
        };
        assert_eq!(classify_backend_error(unavailable.clone()), unavailable);
        assert_eq!(classify_backend_error(AppError::Cancelled), AppError::Cancelled);

        let api = AppError::UpstreamApi("bad gateway".into());
        assert_eq!(classify_backend_error(api.clone()), api);
    }

    #[test]
    fn test_registry_covers_catalogs() {
        let registry = AssetRegistry::from_catalogs();
        assert!(!registry.is_empty());

        let video = registry.get_asset("video-business.mp4").unwrap();
        assert_eq!(video.path, "/assets/generated/video-business.mp4");

        let by_path = registry
            .get_asset("/assets/generated/avatar-tech-modern.png")
            .unwrap();
        assert_eq!(by_path.key, "avatar-tech-modern.png");

        assert!(registry.get_asset("missing.png").is_none());
    }

    #[test]
    fn test_registry_deduplicates_shared_images() {
        let registry = AssetRegistry::from_paths(["/a/x.png", "/a/x.png", "/a/y.png"]);
        assert_eq!(registry.len(), 2);
        let keys: Vec<_> = registry.list_assets().into_iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["x.png", "y.png"]);
    }
}
