//! 生成结果
//!
//! 每次生成调用新建一个结果，只保存在会话状态中，会话重置或重新生成时丢弃。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 工具类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ToolKind {
    Video,
    Avatar,
    Post,
    Message,
    ImagePrompt,
    Caption,
    Thumbnail,
    Script,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Video => "video",
            ToolKind::Avatar => "avatar",
            ToolKind::Post => "post",
            ToolKind::Message => "message",
            ToolKind::ImagePrompt => "imagePrompt",
            ToolKind::Caption => "caption",
            ToolKind::Thumbnail => "thumbnail",
            ToolKind::Script => "script",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ToolKind {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "video" => Ok(ToolKind::Video),
            "avatar" => Ok(ToolKind::Avatar),
            "post" => Ok(ToolKind::Post),
            "message" => Ok(ToolKind::Message),
            "imageprompt" | "image-prompt" | "image_prompt" => Ok(ToolKind::ImagePrompt),
            "caption" => Ok(ToolKind::Caption),
            "thumbnail" => Ok(ToolKind::Thumbnail),
            "script" => Ok(ToolKind::Script),
            _ => Err(format!("Unknown tool: {}", s)),
        }
    }
}

/// 纯文本结果（帖子、消息、图像提示词）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextResult {
    pub text: String,
}

/// 图像结果（后端文字转图像）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub image_url: String,
    pub title: String,
    pub description: String,
}

/// 视频结果
///
/// `no_match` 为真时不是错误，而是提示用户换用目录关键词。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub title: String,
    pub description: String,
    pub prompt_caption: String,
    pub no_match: bool,
}

/// 头像结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvatarResult {
    pub image: String,
    pub style: String,
}

/// 配文结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionResult {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub tone: String,
}

/// 视频脚本结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScriptResult {
    pub intro: String,
    pub body: String,
    pub outro: String,
    pub topic: String,
}

/// 缩略图结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResult {
    pub image: String,
    pub title: String,
    pub description: String,
    pub thumbnail_text: String,
    pub hook: String,
    pub style: String,
}

/// 生成结果（按工具类型区分）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationResult {
    Text(TextResult),
    Image(ImageResult),
    Video(VideoResult),
    Avatar(AvatarResult),
    Caption(CaptionResult),
    Script(ScriptResult),
    Thumbnail(ThumbnailResult),
}

/// 逐步输出中的部分内容
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Partial {
    Text(String),
    Script(ScriptResult),
}

/// 进度通知
///
/// 单次生成内按时间顺序递增发送，最终结果总在所有通知之后交付。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// 0-100
    pub percent: u8,
    pub partial: Option<Partial>,
}

impl Progress {
    pub fn percent(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            partial: None,
        }
    }

    pub fn text(percent: u8, text: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            partial: Some(Partial::Text(text.into())),
        }
    }

    pub fn script(percent: u8, script: ScriptResult) -> Self {
        Self {
            percent: percent.min(100),
            partial: Some(Partial::Script(script)),
        }
    }
}

/// 进度回调
pub type ProgressCallback<'a> = &'a (dyn Fn(Progress) + Send + Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_kind_parse() {
        assert_eq!(ToolKind::try_from("post"), Ok(ToolKind::Post));
        assert_eq!(ToolKind::try_from("imagePrompt"), Ok(ToolKind::ImagePrompt));
        assert_eq!(ToolKind::try_from("image-prompt"), Ok(ToolKind::ImagePrompt));
        assert!(ToolKind::try_from("wordCounter").is_err());
    }

    #[test]
    fn test_video_result_serializes_camel_case() {
        let result = GenerationResult::Video(VideoResult {
            video_url: None,
            thumbnail: None,
            title: "No Matching Video Found".into(),
            description: String::new(),
            prompt_caption: "Topic".into(),
            no_match: true,
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "video");
        assert_eq!(json["noMatch"], true);
        assert!(json["videoUrl"].is_null());
    }

    #[test]
    fn test_progress_clamps_percent() {
        assert_eq!(Progress::percent(150).percent, 100);
    }
}
